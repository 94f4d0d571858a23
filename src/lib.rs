//! Talent Shortlist - client for the resume shortlisting service
//!
//! A job description goes in through [`core::JdForm`], is sent to the backend
//! by [`services::ApiClient`], lands in the root [`core::AppState`] and is shown
//! by [`core::ResultsPanel`] as the three best-scoring candidates.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod view;

// Re-export commonly used types
pub use config::{ApiBase, Settings, SettingsError};
pub use core::{App, AppState, JdForm, ResultsPanel, SubmitOutcome};
pub use models::{Candidate, Category, ExperienceLevel, ShortlistRequest};
pub use services::{ApiClient, ApiError};
