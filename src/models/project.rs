// Project list entries shown on the dashboard

use serde::{Deserialize, Serialize};

/// Display entry derived from git metadata and the container listing.
/// Ids are positional (1-based) and not stable across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: u32,
    pub name: String,
    pub branch: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<String>,
}
