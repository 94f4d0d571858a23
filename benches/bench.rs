// Criterion benchmarks for Talent Shortlist

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use talent_shortlist::core::{top_candidates, TOP_N};
use talent_shortlist::models::Candidate;

fn create_candidate(id: usize) -> Candidate {
    serde_json::from_value(json!({
        "resume_id": format!("r{}", id),
        "name": format!("Candidate {}", id),
        "email": format!("candidate{}@example.com", id),
        "experience": (id % 15) as f64,
        "score": ((id * 7919) % 101) as f64,
        "fit": "Relevant enterprise sales experience",
    }))
    .expect("valid candidate")
}

fn bench_top_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_candidates");

    for size in [10, 100, 1000].iter() {
        let results: Vec<Candidate> = (0..*size).map(create_candidate).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| top_candidates(black_box(&results), TOP_N));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let results: Vec<Candidate> = (0..100).map(create_candidate).collect();

    c.bench_function("normalize_100_candidates", |b| {
        b.iter(|| {
            black_box(results.clone())
                .into_iter()
                .map(Candidate::normalized)
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(benches, bench_top_candidates, bench_normalize);
criterion_main!(benches);
