use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A shortlisted candidate as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub resume_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Years of experience
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: f64,
    /// Fit score, 0-100
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fit: String,
    /// Fields the client does not interpret (e.g. `skills`), kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Candidate {
    /// Default `item_id` to `resume_id` when the backend left it out.
    ///
    /// A candidate with `item_id` but no `resume_id` passes through untouched.
    pub fn normalized(mut self) -> Self {
        if self.item_id.is_none() {
            self.item_id = self.resume_id.clone();
        }
        self
    }
}

/// Job category the backend partitions resumes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Sales")]
    Sales,
    #[default]
    #[serde(rename = "Pre-Sales")]
    PreSales,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sales => "Sales",
            Category::PreSales => "Pre-Sales",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sales" => Ok(Category::Sales),
            "pre-sales" | "presales" | "pre_sales" => Ok(Category::PreSales),
            other => Err(format!("unknown category '{}' (expected Sales or Pre-Sales)", other)),
        }
    }
}

/// Inclusive range of years of experience
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: f64,
    pub max: f64,
}

/// Experience level presets offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Fresher,
    Mid,
    Senior,
    Leadership,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Fresher,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Leadership,
    ];

    /// Fixed preset table
    pub fn range(&self) -> ExperienceRange {
        let (min, max) = match self {
            ExperienceLevel::Fresher => (0.0, 2.0),
            ExperienceLevel::Mid => (2.0, 5.0),
            ExperienceLevel::Senior => (5.0, 10.0),
            ExperienceLevel::Leadership => (10.0, 40.0),
        };
        ExperienceRange { min, max }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Leadership => "leadership",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| level.key() == key)
            .ok_or_else(|| {
                format!(
                    "unknown experience level '{}' (expected fresher, mid, senior or leadership)",
                    key
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preset_table() {
        assert_eq!(ExperienceLevel::Fresher.range(), ExperienceRange { min: 0.0, max: 2.0 });
        assert_eq!(ExperienceLevel::Mid.range(), ExperienceRange { min: 2.0, max: 5.0 });
        assert_eq!(ExperienceLevel::Senior.range(), ExperienceRange { min: 5.0, max: 10.0 });
        assert_eq!(ExperienceLevel::Leadership.range(), ExperienceRange { min: 10.0, max: 40.0 });
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("Senior".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Senior));
        assert!("principal".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(serde_json::to_value(Category::PreSales).unwrap(), json!("Pre-Sales"));
        assert_eq!(serde_json::to_value(Category::Sales).unwrap(), json!("Sales"));
        assert_eq!("presales".parse::<Category>(), Ok(Category::PreSales));
        assert_eq!(Category::default(), Category::PreSales);
    }

    #[test]
    fn test_candidate_keeps_unknown_fields() {
        let candidate: Candidate = serde_json::from_value(json!({
            "resume_id": "r1",
            "name": "Asha",
            "email": "asha@example.com",
            "experience": 6.5,
            "score": 88,
            "fit": "Strong enterprise sales background",
            "skills": "crm, negotiation"
        }))
        .unwrap();

        assert_eq!(candidate.score, 88.0);
        assert_eq!(candidate.extra.get("skills"), Some(&json!("crm, negotiation")));
    }

    #[test]
    fn test_candidate_tolerates_null_fields() {
        let candidates: Vec<Candidate> = serde_json::from_value(json!([
            {"resume_id": "r1", "name": null, "email": null, "experience": null, "score": null, "fit": null},
            {"resume_id": "r2", "name": "Ravi", "score": 71.0},
        ]))
        .unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "");
        assert_eq!(candidates[0].email, "");
        assert_eq!(candidates[0].experience, 0.0);
        assert_eq!(candidates[0].score, 0.0);
        assert_eq!(candidates[0].fit, "");
        assert!(candidates[0].extra.is_empty());
        assert_eq!(candidates[1].score, 71.0);
    }

    #[test]
    fn test_normalized_aliases_item_id() {
        let candidate: Candidate = serde_json::from_value(json!({ "resume_id": "r9" })).unwrap();
        assert_eq!(candidate.normalized().item_id.as_deref(), Some("r9"));

        let orphan: Candidate = serde_json::from_value(json!({ "item_id": "i7" })).unwrap();
        let orphan = orphan.normalized();
        assert_eq!(orphan.resume_id, None);
        assert_eq!(orphan.item_id.as_deref(), Some("i7"));
    }
}
