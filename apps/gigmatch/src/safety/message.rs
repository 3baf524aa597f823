use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Indian mobile number: optional +91/91 prefix, ten digits starting 6–9.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\+?91[\s-]?)?[6-9]\d{9}").expect("valid regex"));

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid regex")
});

const WHATSAPP_MARKERS: &[&str] = &["whatsapp", "wa.me"];

const PAYMENT_KEYWORDS: &[&str] = &[
    "paytm",
    "gpay",
    "phonepe",
    "bank transfer",
    "send money",
    "payment",
];

/// Why a chat message was flagged. Checks run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuspicionReason {
    #[serde(rename = "contains phone number")]
    PhoneNumber,
    #[serde(rename = "WhatsApp reference")]
    WhatsApp,
    #[serde(rename = "contains email address")]
    Email,
    #[serde(rename = "payment reference")]
    Payment,
}

impl SuspicionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuspicionReason::PhoneNumber => "contains phone number",
            SuspicionReason::WhatsApp => "WhatsApp reference",
            SuspicionReason::Email => "contains email address",
            SuspicionReason::Payment => "payment reference",
        }
    }
}

impl fmt::Display for SuspicionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFinding {
    pub is_suspicious: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SuspicionReason>,
}

impl MessageFinding {
    fn clean() -> Self {
        Self {
            is_suspicious: false,
            reason: None,
        }
    }

    fn flagged(reason: SuspicionReason) -> Self {
        Self {
            is_suspicious: true,
            reason: Some(reason),
        }
    }
}

/// Flags chat messages that try to move the conversation or payment off-platform.
///
/// Returns on the first matching check: phone number, WhatsApp, email, payment.
pub fn check_message_suspicion(message: &str) -> MessageFinding {
    if PHONE_REGEX.is_match(message) {
        return MessageFinding::flagged(SuspicionReason::PhoneNumber);
    }

    let lower = message.to_lowercase();

    if WHATSAPP_MARKERS.iter().any(|m| lower.contains(*m)) {
        return MessageFinding::flagged(SuspicionReason::WhatsApp);
    }

    if EMAIL_REGEX.is_match(message) {
        return MessageFinding::flagged(SuspicionReason::Email);
    }

    if PAYMENT_KEYWORDS.iter().any(|k| lower.contains(*k)) {
        return MessageFinding::flagged(SuspicionReason::Payment);
    }

    MessageFinding::clean()
}
