// Domain models

mod aws;
mod deploy;
mod docker;
mod github;
mod project;
mod snapshot;
mod system;

pub use aws::AwsInfo;
pub use deploy::{DeployRequest, DeployResponse, DeploymentLog, DeploymentStats};
pub use docker::{ContainerState, ContainerSummary, DockerInfo};
pub use github::{CommitInfo, GithubInfo};
pub use project::ProjectView;
pub use snapshot::Snapshot;
pub use system::{DiskMetrics, MemoryMetrics, SystemMetrics};
