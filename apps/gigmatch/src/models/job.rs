use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    #[default]
    PartTime,
    Gig,
    Freelance,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Gig => "gig",
            JobType::Freelance => "freelance",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job posting as read from the marketplace's job store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub category: String,
    pub location: String,
    pub job_type: JobType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_serde_kebab_case() {
        let jt: JobType = serde_json::from_str(r#""full-time""#).unwrap();
        assert_eq!(jt, JobType::FullTime);
        assert_eq!(serde_json::to_string(&JobType::Gig).unwrap(), r#""gig""#);
    }

    #[test]
    fn test_job_deserializes_with_missing_fields() {
        let job: Job = serde_json::from_str(
            r#"{"title": "Cook", "requiredSkills": ["Cooking"], "jobType": "part-time"}"#,
        )
        .unwrap();
        assert_eq!(job.required_skills, vec!["Cooking".to_string()]);
        assert_eq!(job.job_type, JobType::PartTime);
        assert!(job.category.is_empty());
        assert!(job.id.is_none());
    }

    #[test]
    fn test_job_type_display_matches_wire_name() {
        assert_eq!(JobType::Freelance.to_string(), "freelance");
    }
}
