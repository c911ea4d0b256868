//! Live ride snapshot as reported by the wait-time provider.

use serde::{Deserialize, Serialize};

/// One ride's state at fetch time.
///
/// An immutable snapshot: it has no identity beyond its fields for the
/// duration of a planning call. A record missing `name` or `is_open` is
/// malformed and fails deserialization outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub id: u32,
    pub name: String,
    pub land: String,
    pub is_open: bool,
    /// Posted wait in minutes. `None` when the provider reports no figure.
    pub wait_time: Option<u32>,
    /// Provider timestamp of the last update, if any.
    #[serde(default)]
    pub last_updated: Option<String>,
}
