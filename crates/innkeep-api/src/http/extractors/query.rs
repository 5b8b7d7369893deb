//! Query parameter extractors.

use serde::Deserialize;

/// `?name=` for employee search. A missing parameter searches for the empty
/// string, which matches everyone.
#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

/// `?status=` for status updates.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}
