// Probe interfaces and the fan-out/fan-in snapshot collector.
//
// Each probe returns its section of the snapshot directly; failures are
// degraded into the result inside the adapter (error message + safe
// defaults) and never propagate. One group failing cannot affect another.

use crate::models::{AwsInfo, DockerInfo, GithubInfo, Snapshot, SystemMetrics};
use async_trait::async_trait;
use std::sync::Arc;

/// Container runtime introspection (container + image listing).
#[async_trait]
pub trait ContainerProbe: Send + Sync {
    async fn collect(&self) -> DockerInfo;
}

/// Host metrics (platform, uptime, load, memory, disk).
#[async_trait]
pub trait HostProbe: Send + Sync {
    async fn collect(&self) -> SystemMetrics;
}

/// Repository metadata (branch, last commit, workflow files).
#[async_trait]
pub trait RepoProbe: Send + Sync {
    async fn collect(&self) -> GithubInfo;
}

/// Cloud instance metadata (public IP, instance identity).
#[async_trait]
pub trait CloudProbe: Send + Sync {
    async fn collect(&self) -> AwsInfo;
}

pub struct Collector {
    docker: Arc<dyn ContainerProbe>,
    host: Arc<dyn HostProbe>,
    repo: Arc<dyn RepoProbe>,
    cloud: Arc<dyn CloudProbe>,
}

impl Collector {
    pub fn new(
        docker: Arc<dyn ContainerProbe>,
        host: Arc<dyn HostProbe>,
        repo: Arc<dyn RepoProbe>,
        cloud: Arc<dyn CloudProbe>,
    ) -> Self {
        Self {
            docker,
            host,
            repo,
            cloud,
        }
    }

    /// Run all four probe groups concurrently and merge the results into
    /// one snapshot. Infallible: every group degrades independently.
    pub async fn refresh(&self) -> Snapshot {
        let (docker_info, system_metrics, github_info, aws_info) = tokio::join!(
            self.docker.collect(),
            self.host.collect(),
            self.repo.collect(),
            self.cloud.collect(),
        );
        Snapshot {
            docker_info,
            system_metrics,
            github_info,
            aws_info,
            last_updated: chrono::Utc::now().to_rfc3339(),
        }
    }
}
