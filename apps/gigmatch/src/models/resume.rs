//! Structured résumé data, as produced by the résumé parsing collaborator.
//!
//! All fields default when absent so partially-parsed résumés still load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    /// Free-text duration, e.g. "2019 - 2022", "3 years", "2021 - Present".
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_resume_tolerates_partial_json() {
        let json = r#"{
            "skills": ["Python", "SQL"],
            "experience": [{"title": "Developer", "duration": "2019 - 2022"}]
        }"#;
        let parsed: ParsedResume = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.skills.len(), 2);
        assert_eq!(parsed.experience[0].title, "Developer");
        assert!(parsed.experience[0].company.is_empty());
        assert!(parsed.projects.is_empty());
        assert!(parsed.education.is_empty());
    }
}
