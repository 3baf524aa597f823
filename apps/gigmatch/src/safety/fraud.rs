use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::safety::SafetyError;

/// Phrases typical of advance-fee and fake-income job scams. Scan order is
/// list order, and findings are reported in this order.
pub const FRAUD_KEYWORDS: &[&str] = &[
    "registration fee",
    "send money",
    "guaranteed income",
    "advance payment",
    "processing fee",
    "security deposit",
    "pay to apply",
    "upfront payment",
    "easy money",
    "quick money",
    "double your money",
    "investment required",
    "wire transfer",
    "lottery",
    "bank details",
    "no interview required",
];

/// Postings with at least this many fraud phrases are rejected outright.
pub const POSTING_BLOCK_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudFinding {
    pub is_suspicious: bool,
    pub keywords: Vec<String>,
}

/// Advisory scan: which known fraud phrases appear in `text` (case-insensitive).
pub fn detect_fraud_keywords(text: &str) -> FraudFinding {
    let lower = text.to_lowercase();
    let keywords: Vec<String> = FRAUD_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(**kw))
        .map(|kw| kw.to_string())
        .collect();

    FraudFinding {
        is_suspicious: !keywords.is_empty(),
        keywords,
    }
}

/// Write-time gate for new job postings.
///
/// Rejects when `POSTING_BLOCK_THRESHOLD` or more phrases are found across
/// title and description. A single hit is allowed and returned as advice.
pub fn screen_job_posting(title: &str, description: &str) -> Result<FraudFinding, SafetyError> {
    let finding = detect_fraud_keywords(&format!("{title} {description}"));
    if finding.keywords.len() >= POSTING_BLOCK_THRESHOLD {
        warn!(
            "Blocking job posting {:?}: fraud phrases {:?}",
            title, finding.keywords
        );
        return Err(SafetyError::FraudulentPosting {
            keywords: finding.keywords,
        });
    }
    Ok(finding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_fee_scam_reports_in_list_order() {
        let finding =
            detect_fraud_keywords("Pay a registration fee of ₹500 to apply, guaranteed income!");
        assert_eq!(
            finding,
            FraudFinding {
                is_suspicious: true,
                keywords: vec!["registration fee".to_string(), "guaranteed income".to_string()],
            }
        );
    }

    #[test]
    fn test_order_follows_list_not_input() {
        let finding = detect_fraud_keywords("GUARANTEED INCOME. Small registration fee.");
        assert_eq!(finding.keywords, vec!["registration fee", "guaranteed income"]);
    }

    #[test]
    fn test_clean_text_is_not_suspicious() {
        let finding = detect_fraud_keywords("Need a cook for a family of four in Guntur.");
        assert!(!finding.is_suspicious);
        assert!(finding.keywords.is_empty());
    }

    #[test]
    fn test_scan_is_repeatable() {
        let text = "Send money for the security deposit, then earn easy money";
        assert_eq!(detect_fraud_keywords(text), detect_fraud_keywords(text));
        assert_eq!(
            detect_fraud_keywords(text).keywords,
            vec!["send money", "security deposit", "easy money"]
        );
    }

    #[test]
    fn test_posting_gate_allows_single_phrase() {
        let finding = screen_job_posting("Delivery rider", "Security deposit for the bike.").unwrap();
        assert_eq!(finding.keywords, vec!["security deposit"]);
    }

    #[test]
    fn test_posting_gate_blocks_two_phrases_across_fields() {
        let err = screen_job_posting("Guaranteed income!", "Small registration fee applies")
            .unwrap_err();
        match err {
            SafetyError::FraudulentPosting { keywords } => {
                assert_eq!(keywords, vec!["registration fee", "guaranteed income"]);
            }
        }
    }
}
