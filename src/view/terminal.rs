use std::fmt::{self, Write as _};
use std::io::{self, BufRead, IsTerminal};

use crate::config::ApiBase;
use crate::core::{DisplayState, ResultsPanel};
use crate::view::{Alerts, Browser};

/// Alerts printed to stderr
#[derive(Debug, Default)]
pub struct TerminalAlerts;

impl Alerts for TerminalAlerts {
    fn alert(&mut self, message: &str) {
        eprintln!("! {}", message);
    }

    fn warn_blocking(&mut self, message: &str) {
        eprintln!("! {}", message);

        // Only wait for acknowledgement when someone is there to give it
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprint!("  Press Enter to continue...");
            let _ = io::Write::flush(&mut io::stderr());
            let mut line = String::new();
            let _ = stdin.lock().read_line(&mut line);
        }
    }
}

/// Hands links to the terminal, which is the closest thing to a new tab
#[derive(Debug, Default)]
pub struct TerminalBrowser;

impl Browser for TerminalBrowser {
    fn open_new_context(&mut self, url: &str) {
        println!("Open: {}", url);
    }
}

/// Static branding shown above the form
pub fn render_header(out: &mut impl fmt::Write, api_base: &ApiBase) -> fmt::Result {
    writeln!(out, "Resume Shortlist")?;
    writeln!(out, "Top candidates for your job description  [{}]", api_base)?;
    writeln!(out, "{}", "=".repeat(60))
}

/// Render the panel in its current display state
pub fn render_panel(out: &mut impl fmt::Write, panel: &ResultsPanel<'_>) -> fmt::Result {
    match panel.display_state() {
        DisplayState::Loading => writeln!(out, "Shortlisting candidates..."),
        DisplayState::Empty => writeln!(out, "No candidates yet. Submit a job description to see the top matches."),
        DisplayState::Populated(cards) => {
            for (rank, candidate) in cards.iter().enumerate() {
                if rank > 0 {
                    writeln!(out)?;
                }
                let email = if candidate.email.is_empty() { "no email" } else { candidate.email.as_str() };
                writeln!(out, "#{}  {}  <{}>", rank + 1, candidate.name, email)?;
                writeln!(
                    out,
                    "    Experience: {} yrs   Fit score: {}",
                    format_number(candidate.experience),
                    format_number(candidate.score)
                )?;
                if !candidate.fit.is_empty() {
                    writeln!(out, "    {}", candidate.fit)?;
                }
                match panel.download_link(candidate) {
                    Some(url) => writeln!(out, "    Resume: {}", url)?,
                    None => writeln!(out, "    Resume: unavailable")?,
                }
            }
            Ok(())
        }
    }
}

/// Whole numbers without a trailing `.0`, everything else to one decimal
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Candidate;
    use serde_json::json;

    fn base() -> ApiBase {
        ApiBase::parse("https://shortlist.test").unwrap()
    }

    #[test]
    fn test_render_empty_and_loading() {
        let base = base();
        let mut out = String::new();
        render_panel(&mut out, &ResultsPanel::new(&[], false, &base)).unwrap();
        assert!(out.starts_with("No candidates yet"));

        let mut out = String::new();
        render_panel(&mut out, &ResultsPanel::new(&[], true, &base)).unwrap();
        assert!(out.starts_with("Shortlisting"));
    }

    #[test]
    fn test_render_cards() {
        let base = base();
        let results: Vec<Candidate> = serde_json::from_value(json!([
            { "resume_id": "r1", "name": "Asha", "email": "asha@example.com",
              "experience": 6.5, "score": 72, "fit": "Good fit" },
            { "resume_id": null, "name": "Ravi", "email": "", "experience": 3, "score": 91, "fit": "" }
        ]))
        .unwrap();

        let mut out = String::new();
        render_panel(&mut out, &ResultsPanel::new(&results, false, &base)).unwrap();

        assert!(out.starts_with("#1  Ravi  <no email>"));
        assert!(out.contains("Resume: unavailable"));
        assert!(out.contains("#2  Asha  <asha@example.com>"));
        assert!(out.contains("Experience: 6.5 yrs   Fit score: 72"));
        assert!(out.contains("Resume: https://shortlist.test/resumes/r1/download"));
    }

    #[test]
    fn test_header() {
        let mut out = String::new();
        render_header(&mut out, &base()).unwrap();
        assert!(out.contains("https://shortlist.test"));
    }
}
