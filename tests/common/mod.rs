// Shared test helpers: config and fake probes

use async_trait::async_trait;
use deployboard::collector::{CloudProbe, ContainerProbe, HostProbe, RepoProbe};
use deployboard::config::AppConfig;
use deployboard::models::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::time::Duration;

pub const TEST_CONFIG: &str = r#"
[server]
port = 8081
host = "127.0.0.1"
environment = "development"

[collector]
refresh_interval_secs = 30
repo_dir = "."
public_ip_url = "http://127.0.0.1:9/ip"
metadata_url = "http://127.0.0.1:9"
request_timeout_secs = 1

[deploy]
delay_ms = 20
success_rate = 1.0

[monitoring]
stats_log_interval_secs = 60
"#;

pub fn test_app_config() -> AppConfig {
    AppConfig::load_from_str(TEST_CONFIG).unwrap()
}

pub fn running_container(name: &str, image: &str) -> ContainerSummary {
    ContainerSummary {
        id: format!("{name}000000"),
        name: name.to_string(),
        image: image.to_string(),
        state: ContainerState::Running,
        status: "Up 2 hours".to_string(),
    }
}

pub fn healthy_docker(containers: Vec<ContainerSummary>) -> DockerInfo {
    DockerInfo {
        running: true,
        container_count: containers.len() as u32,
        image_count: 3,
        version: Some("27.0.1".to_string()),
        containers,
        error: None,
    }
}

pub fn healthy_system() -> SystemMetrics {
    SystemMetrics {
        platform: "linux".to_string(),
        hostname: "test-host".to_string(),
        os_version: "6.1".to_string(),
        uptime_secs: 1234,
        cpu_count: 8,
        load_average: vec![0.5, 0.4, 0.3],
        memory: MemoryMetrics {
            total: 16_000_000_000,
            available: 8_000_000_000,
            used: 8_000_000_000,
            usage_percent: 50.0,
        },
        disk: DiskMetrics {
            mount: "/".to_string(),
            total: 500_000_000_000,
            used: 250_000_000_000,
            available: 250_000_000_000,
            usage_percent: 50.0,
        },
        error: None,
    }
}

pub fn healthy_github(branch: &str) -> GithubInfo {
    GithubInfo {
        branch: Some(branch.to_string()),
        last_commit: Some(CommitInfo {
            hash: "abc1234def5678abc1234def5678abc1234def56".to_string(),
            short_hash: "abc1234".to_string(),
            message: "fix the thing".to_string(),
            author: "dev".to_string(),
            date: "2026-08-01T10:00:00+00:00".to_string(),
        }),
        remote_url: Some("git@github.com:acme/shop-api.git".to_string()),
        workflows: vec!["ci.yml".to_string()],
        error: None,
    }
}

pub fn healthy_aws() -> AwsInfo {
    AwsInfo {
        available: true,
        public_ip: Some("203.0.113.7".to_string()),
        instance_id: Some("i-0123456789abcdef0".to_string()),
        region: Some("eu-west-1".to_string()),
        error: None,
    }
}

// --- Fixed fakes: return a canned result on every collect ---

pub struct FixedDocker(pub DockerInfo);

#[async_trait]
impl ContainerProbe for FixedDocker {
    async fn collect(&self) -> DockerInfo {
        self.0.clone()
    }
}

pub struct FixedHost(pub SystemMetrics);

#[async_trait]
impl HostProbe for FixedHost {
    async fn collect(&self) -> SystemMetrics {
        self.0.clone()
    }
}

pub struct FixedRepo(pub GithubInfo);

#[async_trait]
impl RepoProbe for FixedRepo {
    async fn collect(&self) -> GithubInfo {
        self.0.clone()
    }
}

pub struct FixedCloud(pub AwsInfo);

#[async_trait]
impl CloudProbe for FixedCloud {
    async fn collect(&self) -> AwsInfo {
        self.0.clone()
    }
}

// --- Counting fakes: stamp each group with the refresh cycle number ---
//
// The docker fake bumps the shared counter at the start of its collect;
// the other three sleep first and read it afterwards. If two refresh
// cycles ever overlapped, the late readers would observe the next cycle's
// value and the published snapshot would carry mixed stamps.

pub struct CountingDocker {
    pub cycle: Arc<AtomicU64>,
    pub delay: Duration,
}

#[async_trait]
impl ContainerProbe for CountingDocker {
    async fn collect(&self) -> DockerInfo {
        let n = self.cycle.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        DockerInfo {
            container_count: n as u32,
            ..healthy_docker(Vec::new())
        }
    }
}

pub struct CountingHost {
    pub cycle: Arc<AtomicU64>,
    pub delay: Duration,
}

#[async_trait]
impl HostProbe for CountingHost {
    async fn collect(&self) -> SystemMetrics {
        tokio::time::sleep(self.delay).await;
        SystemMetrics {
            uptime_secs: self.cycle.load(Ordering::SeqCst),
            ..healthy_system()
        }
    }
}

pub struct CountingRepo {
    pub cycle: Arc<AtomicU64>,
    pub delay: Duration,
}

#[async_trait]
impl RepoProbe for CountingRepo {
    async fn collect(&self) -> GithubInfo {
        tokio::time::sleep(self.delay).await;
        GithubInfo {
            branch: Some(format!("cycle-{}", self.cycle.load(Ordering::SeqCst))),
            ..GithubInfo::default()
        }
    }
}

pub struct CountingCloud {
    pub cycle: Arc<AtomicU64>,
    pub delay: Duration,
}

#[async_trait]
impl CloudProbe for CountingCloud {
    async fn collect(&self) -> AwsInfo {
        tokio::time::sleep(self.delay).await;
        AwsInfo {
            available: true,
            public_ip: Some(self.cycle.load(Ordering::SeqCst).to_string()),
            ..AwsInfo::default()
        }
    }
}
