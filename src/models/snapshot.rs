// The merged point-in-time snapshot served by GET /api/system

use serde::{Deserialize, Serialize};

use super::{AwsInfo, DockerInfo, GithubInfo, SystemMetrics};

/// Aggregate of all four probe groups. Replaced wholesale every refresh
/// cycle; readers only ever see a complete snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub docker_info: DockerInfo,
    pub system_metrics: SystemMetrics,
    pub github_info: GithubInfo,
    pub aws_info: AwsInfo,
    pub last_updated: String,
}

impl Default for Snapshot {
    /// Placeholder published before the first refresh completes.
    fn default() -> Self {
        const PENDING: &str = "not collected yet";
        Self {
            docker_info: DockerInfo::degraded(PENDING),
            system_metrics: SystemMetrics::degraded(PENDING),
            github_info: GithubInfo::degraded(PENDING),
            aws_info: AwsInfo::degraded(PENDING),
            last_updated: chrono::Utc::now().to_rfc3339(),
        }
    }
}
