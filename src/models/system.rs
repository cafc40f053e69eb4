// Host metrics models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryMetrics {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskMetrics {
    pub mount: String,
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    pub platform: String,
    pub hostname: String,
    pub os_version: String,
    pub uptime_secs: u64,
    pub cpu_count: u32,
    /// 1/5/15 minute load averages.
    pub load_average: Vec<f64>,
    pub memory: MemoryMetrics,
    pub disk: DiskMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SystemMetrics {
    /// Safe default when the host metrics probe fails.
    pub fn degraded(error: impl Into<String>) -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            hostname: String::new(),
            os_version: String::new(),
            uptime_secs: 0,
            cpu_count: 0,
            load_average: Vec::new(),
            memory: MemoryMetrics {
                total: 0,
                available: 0,
                used: 0,
                usage_percent: 0.0,
            },
            disk: DiskMetrics {
                mount: "/".to_string(),
                total: 0,
                used: 0,
                available: 0,
                usage_percent: 0.0,
            },
            error: Some(error.into()),
        }
    }
}
