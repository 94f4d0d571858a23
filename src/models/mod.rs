// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, Category, ExperienceLevel, ExperienceRange};
pub use requests::{ListResumesQuery, ShortlistRequest};
pub use responses::{HealthResponse, ResumeFile};
