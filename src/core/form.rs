use crate::models::{Candidate, Category, ExperienceLevel, ShortlistRequest};
use crate::services::ApiClient;
use crate::view::Alerts;

/// Callbacks the form reports to its parent through
pub trait FormEvents {
    fn set_loading(&mut self, loading: bool);
    fn on_results(&mut self, results: Vec<Candidate>);
}

/// How a submit ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent
    Invalid,
    /// The request failed; results were left alone
    Failed,
    Shortlisted { count: usize },
}

/// Job-description form
#[derive(Debug, Clone, Default)]
pub struct JdForm {
    pub jd: String,
    pub category: Category,
    pub level: ExperienceLevel,
}

impl JdForm {
    pub fn new(jd: impl Into<String>, level: ExperienceLevel, category: Category) -> Self {
        Self {
            jd: jd.into(),
            category,
            level,
        }
    }

    /// Request the form would send, or `None` when the JD is blank
    pub fn request(&self) -> Option<ShortlistRequest> {
        if self.jd.trim().is_empty() {
            return None;
        }
        Some(ShortlistRequest::new(self.jd.clone(), self.level, self.category))
    }

    /// Submit the form.
    ///
    /// API failures are caught here: the user is alerted, the error is logged
    /// and `loading` always returns to false.
    pub async fn submit(
        &self,
        api: &ApiClient,
        events: &mut dyn FormEvents,
        alerts: &mut dyn Alerts,
    ) -> SubmitOutcome {
        let Some(request) = self.request() else {
            alerts.alert("Please enter a job description.");
            return SubmitOutcome::Invalid;
        };

        events.set_loading(true);

        let outcome = match api.shortlist_resumes(&request).await {
            Ok(candidates) => {
                let normalized: Vec<Candidate> =
                    candidates.into_iter().map(Candidate::normalized).collect();
                let count = normalized.len();
                tracing::info!("Shortlist returned {} candidates", count);
                events.on_results(normalized);
                SubmitOutcome::Shortlisted { count }
            }
            Err(e) => {
                tracing::error!("Shortlist request failed: {}", e);
                alerts.alert("Failed to fetch shortlist. Check the backend and try again.");
                SubmitOutcome::Failed
            }
        };

        events.set_loading(false);
        outcome
    }
}
