use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A worker's profile as read from the marketplace's profile store.
///
/// Every field may be empty. The matcher treats an empty field as "no signal"
/// rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerProfile {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub skills: Vec<String>,
    pub categories: Vec<String>,
    /// Free text, usually "city, region".
    pub location: String,
    /// e.g. "Full-time", "Part-time", "Flexible"
    pub availability: String,
    pub experience: String,
}
