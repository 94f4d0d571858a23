// Client flow exports
pub mod app;
pub mod form;
pub mod results;

pub use app::{App, AppState};
pub use form::{FormEvents, JdForm, SubmitOutcome};
pub use results::{top_candidates, DisplayState, DownloadOutcome, ResultsPanel, TOP_N};
