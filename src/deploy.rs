// Fabricated deploy pipeline: opaque ids, a delayed random outcome, and a
// canned log transcript. Nothing is built, pushed, or deployed.

use crate::config::DeployConfig;
use crate::models::DeploymentLog;
use crate::state::DashboardState;
use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Estimated completion shown in the deploy response.
pub const ESTIMATED_TIME: &str = "30 seconds";

/// Opaque deployment id: `deploy_<epoch-millis>_<projectId>`.
pub fn deployment_id(project_id: &str) -> String {
    let epoch_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("deploy_{}_{}", epoch_ms, project_id)
}

/// Resolve the attempt after the configured delay. The handler does not
/// wait on this; the increment is lost if the process exits first.
pub fn spawn_outcome(
    state: Arc<DashboardState>,
    deployment_id: String,
    config: &DeployConfig,
) -> tokio::task::JoinHandle<()> {
    let delay = Duration::from_millis(config.delay_ms);
    let success_rate = config.success_rate;
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let success = rand::thread_rng().gen_bool(success_rate);
        state.record_outcome(success);
        tracing::info!(
            deployment_id = %deployment_id,
            success,
            operation = "resolve_deployment",
            "Deployment resolved"
        );
    })
}

/// Canned transcript returned for any deployment id, existing or not.
pub fn demo_log(deployment_id: &str) -> DeploymentLog {
    DeploymentLog {
        deployment_id: deployment_id.to_string(),
        status: "completed".to_string(),
        duration: "28s".to_string(),
        logs: vec![
            "Cloning repository...".to_string(),
            "Checking out branch main".to_string(),
            "Building Docker image...".to_string(),
            "Pushing image to registry...".to_string(),
            "Rolling out new containers...".to_string(),
            "Health checks passed".to_string(),
            "Deployment completed successfully".to_string(),
        ],
    }
}
