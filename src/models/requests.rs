use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Category, ExperienceLevel};

/// Body of `POST /shortlist`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ShortlistRequest {
    #[validate(length(min = 1))]
    pub jd_text: String,
    #[validate(range(min = 0.0))]
    pub min_exp: f64,
    #[validate(range(min = 0.0))]
    pub max_exp: f64,
    pub category: Category,
}

impl ShortlistRequest {
    /// Build a request from a preset, resolving it to its year range
    pub fn new(jd_text: impl Into<String>, level: ExperienceLevel, category: Category) -> Self {
        let range = level.range();
        Self {
            jd_text: jd_text.into(),
            min_exp: range.min,
            max_exp: range.max,
            category,
        }
    }
}

/// Query of `GET /resumes`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListResumesQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ListResumesQuery {
    fn default() -> Self {
        Self { limit: default_limit() }
    }
}

pub fn default_limit() -> u32 {
    20
}
