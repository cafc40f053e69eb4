use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub collector: CollectorConfig,
    pub deploy: DeployConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Deployment environment label; controls error detail in responses.
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "production".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    pub refresh_interval_secs: u64,
    /// Directory the git probe runs in.
    #[serde(default = "default_repo_dir")]
    pub repo_dir: String,
    #[serde(default = "default_public_ip_url")]
    pub public_ip_url: String,
    /// Instance metadata endpoint; only reachable on a cloud instance.
    #[serde(default = "default_metadata_url")]
    pub metadata_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_repo_dir() -> String {
    ".".into()
}

fn default_public_ip_url() -> String {
    "https://checkip.amazonaws.com".into()
}

fn default_metadata_url() -> String {
    "http://169.254.169.254".into()
}

fn default_request_timeout_secs() -> u64 {
    3
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    /// Delay before a fabricated deployment resolves.
    pub delay_ms: u64,
    /// Probability that a fabricated deployment resolves as successful.
    pub success_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often to log app stats (refreshes, deployment counters) at INFO level.
    pub stats_log_interval_secs: u64,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.environment.is_empty(),
            "server.environment must be non-empty"
        );
        anyhow::ensure!(
            self.collector.refresh_interval_secs > 0,
            "collector.refresh_interval_secs must be > 0, got {}",
            self.collector.refresh_interval_secs
        );
        anyhow::ensure!(
            !self.collector.repo_dir.is_empty(),
            "collector.repo_dir must be non-empty"
        );
        anyhow::ensure!(
            !self.collector.public_ip_url.is_empty(),
            "collector.public_ip_url must be non-empty"
        );
        anyhow::ensure!(
            !self.collector.metadata_url.is_empty(),
            "collector.metadata_url must be non-empty"
        );
        anyhow::ensure!(
            self.collector.request_timeout_secs > 0,
            "collector.request_timeout_secs must be > 0, got {}",
            self.collector.request_timeout_secs
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.deploy.success_rate),
            "deploy.success_rate must be within 0.0..=1.0, got {}",
            self.deploy.success_rate
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}
