use crate::config::ApiBase;
use crate::models::Candidate;
use crate::view::{Alerts, Browser};

/// Number of cards the panel shows
pub const TOP_N: usize = 3;

/// What the panel currently shows
#[derive(Debug, PartialEq)]
pub enum DisplayState<'a> {
    Loading,
    Empty,
    Populated(Vec<&'a Candidate>),
}

/// Result of a card's download action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Opened(String),
    MissingResume,
}

/// Highest-scoring candidates, best first.
///
/// The sort is stable, so equal scores keep backend order.
pub fn top_candidates(results: &[Candidate], n: usize) -> Vec<&Candidate> {
    let mut ranked: Vec<&Candidate> = results.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);
    ranked
}

/// Read-only view over the root state
#[derive(Debug, Clone, Copy)]
pub struct ResultsPanel<'a> {
    results: &'a [Candidate],
    loading: bool,
    api_base: &'a ApiBase,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(results: &'a [Candidate], loading: bool, api_base: &'a ApiBase) -> Self {
        Self {
            results,
            loading,
            api_base,
        }
    }

    pub fn display_state(&self) -> DisplayState<'a> {
        if self.loading {
            DisplayState::Loading
        } else if self.results.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Populated(top_candidates(self.results, TOP_N))
        }
    }

    /// Download link of a card, if the candidate has a resume on file
    pub fn download_link(&self, candidate: &Candidate) -> Option<String> {
        candidate
            .resume_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| self.api_base.resume_download(id))
    }

    /// Download action of a card
    pub fn download(
        &self,
        candidate: &Candidate,
        alerts: &mut dyn Alerts,
        browser: &mut dyn Browser,
    ) -> DownloadOutcome {
        match self.download_link(candidate) {
            Some(url) => {
                tracing::info!("Opening resume of {}", candidate.name);
                browser.open_new_context(&url);
                DownloadOutcome::Opened(url)
            }
            None => {
                alerts.warn_blocking("Resume is not available for this candidate.");
                DownloadOutcome::MissingResume
            }
        }
    }
}
