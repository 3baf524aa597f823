use serde::{Deserialize, Serialize};

use crate::models::ParsedResume;

/// Default number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 10;

/// A worker's parsed résumé, as handed to the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RagDocument {
    pub worker_id: String,
    pub worker_name: String,
    /// Raw résumé text; tokenized at index time.
    pub text: String,
    pub parsed: ParsedResume,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A résumé search request.
///
/// `min_experience` is in years; `None` or `Some(0)` disables the experience filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RagQuery {
    pub text: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl RagQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagSearchResult {
    pub worker_id: String,
    pub worker_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Keyword score, or LLM relevance (0–100) after a successful re-rank.
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub parsed: ParsedResume,
    /// Only set by the LLM re-ranking pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_deserializes_camel_case() {
        let query: RagQuery =
            serde_json::from_str(r#"{"text": "cook", "skills": ["Cooking"], "minExperience": 2}"#)
                .unwrap();
        assert_eq!(query.min_experience, Some(2));
        assert_eq!(query.effective_limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_document_deserializes_without_phone() {
        let doc: RagDocument = serde_json::from_str(
            r#"{"workerId": "w1", "workerName": "Ravi", "text": "driver", "parsed": {"skills": ["Driving"]}}"#,
        )
        .unwrap();
        assert_eq!(doc.worker_id, "w1");
        assert!(doc.phone.is_none());
        assert_eq!(doc.parsed.skills, vec!["Driving"]);
    }
}
