// Background refresh worker.
// The refresh is awaited inside the tick loop, so a cycle that outruns the
// interval can never overlap the next one; missed ticks are skipped. The
// first tick fires immediately, giving one refresh at startup.

use crate::collector::Collector;
use crate::state::DashboardState;
use std::sync::Arc;
use tokio::time::{Duration, interval};

/// Collector, state and shutdown for the worker.
pub struct WorkerDeps {
    pub collector: Collector,
    pub state: Arc<DashboardState>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Worker timing and logging config.
pub struct WorkerConfig {
    pub refresh_interval_ms: u64,
    /// How often to log app stats (real seconds).
    pub stats_log_interval_secs: u64,
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        collector,
        state,
        mut shutdown_rx,
    } = deps;
    let WorkerConfig {
        refresh_interval_ms,
        stats_log_interval_secs,
    } = config;

    tokio::spawn(async move {
        let mut tick = interval(Duration::from_millis(refresh_interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(Duration::from_secs(stats_log_interval_secs));
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut refreshes_total: u64 = 0;

        let worker_span = tracing::span!(tracing::Level::DEBUG, "worker", refresh_interval_ms);
        let _guard = worker_span.enter();

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let snapshot = collector.refresh().await;
                    state.publish(snapshot).await;
                    refreshes_total += 1;
                    tracing::debug!(
                        operation = "refresh_snapshot",
                        refreshes_total,
                        "Snapshot refreshed"
                    );
                }
                _ = stats_log_tick.tick() => {
                    let deployments = state.deployment_stats();
                    tracing::info!(
                        refreshes_total,
                        deployments_total = deployments.total,
                        deployments_successful = deployments.successful,
                        deployments_failed = deployments.failed,
                        "app stats"
                    );
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
            }
        }
    })
}
