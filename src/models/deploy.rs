// Deploy endpoint request/response models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    pub success: bool,
    pub message: String,
    pub deployment_id: String,
    pub project_id: String,
    pub branch: String,
    pub timestamp: String,
    pub estimated_time: String,
}

/// Process-lifetime deployment counters; reset on restart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeploymentStats {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
}

/// Canned transcript returned for any deployment id lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentLog {
    pub deployment_id: String,
    pub status: String,
    pub duration: String,
    pub logs: Vec<String>,
}
