// Owned dashboard state shared between the refresh worker and request
// handlers. Single-writer discipline: only the worker calls publish();
// handlers read.

use crate::models::{DeploymentStats, Snapshot};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::RwLock;

pub struct DashboardState {
    snapshot: RwLock<Snapshot>,
    deployments_total: AtomicU64,
    deployments_successful: AtomicU64,
    deployments_failed: AtomicU64,
    started: Instant,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Snapshot::default()),
            deployments_total: AtomicU64::new(0),
            deployments_successful: AtomicU64::new(0),
            deployments_failed: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    /// Replace the published snapshot. Whole-value assignment under the
    /// write lock: readers see the previous snapshot or this one, never a
    /// mix of the two.
    pub async fn publish(&self, snapshot: Snapshot) {
        *self.snapshot.write().await = snapshot;
    }

    pub async fn latest(&self) -> Snapshot {
        self.snapshot.read().await.clone()
    }

    /// Count a deploy attempt; called synchronously from the handler.
    pub fn record_attempt(&self) {
        self.deployments_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a resolved attempt; called from the delayed outcome task.
    pub fn record_outcome(&self, success: bool) {
        if success {
            self.deployments_successful.fetch_add(1, Ordering::Relaxed);
        } else {
            self.deployments_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn deployment_stats(&self) -> DeploymentStats {
        DeploymentStats {
            total: self.deployments_total.load(Ordering::Relaxed),
            successful: self.deployments_successful.load(Ordering::Relaxed),
            failed: self.deployments_failed.load(Ordering::Relaxed),
        }
    }

    /// Seconds since process start, for the health endpoint.
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
