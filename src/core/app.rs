use crate::core::form::{FormEvents, JdForm, SubmitOutcome};
use crate::core::results::ResultsPanel;
use crate::models::Candidate;
use crate::services::ApiClient;
use crate::view::Alerts;

/// Root-owned state: the single source of truth for the panel
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub results: Vec<Candidate>,
    pub loading: bool,
}

impl FormEvents for AppState {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // Replaced wholesale; the last response to arrive wins.
    fn on_results(&mut self, results: Vec<Candidate>) {
        self.results = results;
    }
}

/// Root composer wiring the form into the results panel
#[derive(Debug, Clone)]
pub struct App {
    api: ApiClient,
    state: AppState,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: AppState::default(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn submit(&mut self, form: &JdForm, alerts: &mut dyn Alerts) -> SubmitOutcome {
        form.submit(&self.api, &mut self.state, alerts).await
    }

    pub fn panel(&self) -> ResultsPanel<'_> {
        ResultsPanel::new(&self.state.results, self.state.loading, self.api.base())
    }
}
