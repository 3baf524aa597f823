//! Safety filters for free text the marketplace accepts.
//!
//! Two independent, stateless detectors: a fraud-keyword scan for job text and
//! a contact/payment pattern scan for chat messages. The posting gate layers a
//! stricter, blocking policy on top of the fraud scan at write time.

use thiserror::Error;

pub mod fraud;
pub mod message;

pub use fraud::{detect_fraud_keywords, screen_job_posting, FraudFinding, POSTING_BLOCK_THRESHOLD};
pub use message::{check_message_suspicion, MessageFinding, SuspicionReason};

#[derive(Debug, Error)]
pub enum SafetyError {
    #[error("job posting contains suspicious phrases: {}", keywords.join(", "))]
    FraudulentPosting { keywords: Vec<String> },
}
