// Host metrics via sysinfo

use crate::collector::HostProbe;
use crate::models::{DiskMetrics, MemoryMetrics, SystemMetrics};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use sysinfo::{Disks, System};
use tracing::warn;

pub struct SysinfoRepo {
    sys: Arc<std::sync::Mutex<System>>,
    disks: Arc<std::sync::Mutex<Disks>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let disks = Disks::new_with_refreshed_list();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
            disks: Arc::new(std::sync::Mutex::new(disks)),
        }
    }

    async fn gather(&self) -> anyhow::Result<SystemMetrics> {
        let sys = self.sys.clone();
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();

            let total = sys.total_memory();
            let available = sys.available_memory();
            let used = total.saturating_sub(available);
            let memory = MemoryMetrics {
                total,
                available,
                used,
                usage_percent: usage_percent(used, total),
            };

            let mut disks_guard = disks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo disks lock poisoned: {}", e))?;
            disks_guard.refresh(false);
            // Root filesystem where present, else the first listed partition.
            let disk = disks_guard
                .list()
                .iter()
                .find(|d| d.mount_point() == Path::new("/"))
                .or_else(|| disks_guard.list().first())
                .map(|d| {
                    let total = d.total_space();
                    let available = d.available_space();
                    let used = total.saturating_sub(available);
                    DiskMetrics {
                        mount: d.mount_point().to_string_lossy().into_owned(),
                        total,
                        used,
                        available,
                        usage_percent: usage_percent(used, total),
                    }
                })
                .unwrap_or(DiskMetrics {
                    mount: "/".to_string(),
                    total: 0,
                    used: 0,
                    available: 0,
                    usage_percent: 0.0,
                });

            let load = System::load_average();
            Ok(SystemMetrics {
                platform: std::env::consts::OS.to_string(),
                hostname: System::host_name().unwrap_or_default(),
                os_version: System::os_version().unwrap_or_default(),
                uptime_secs: System::uptime(),
                cpu_count: sys.cpus().len() as u32,
                load_average: vec![load.one, load.five, load.fifteen],
                memory,
                disk,
                error: None,
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }
}

fn usage_percent(used: u64, total: u64) -> f64 {
    if total > 0 {
        (used as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[async_trait]
impl HostProbe for SysinfoRepo {
    async fn collect(&self) -> SystemMetrics {
        match self.gather().await {
            Ok(metrics) => metrics,
            Err(e) => {
                warn!(
                    error = %e,
                    operation = "collect_host_metrics",
                    "host metrics probe failed"
                );
                SystemMetrics::degraded(e.to_string())
            }
        }
    }
}
