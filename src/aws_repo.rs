// Cloud probe: public IP and EC2 instance identity via short-timeout
// HTTP lookups.

use crate::collector::CloudProbe;
use crate::config::CollectorConfig;
use crate::models::AwsInfo;
use crate::version;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

pub struct AwsRepo {
    client: reqwest::Client,
    public_ip_url: String,
    metadata_url: String,
}

impl AwsRepo {
    pub fn new(config: &CollectorConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(version::user_agent())
            .build()?;
        Ok(Self {
            client,
            public_ip_url: config.public_ip_url.clone(),
            metadata_url: config.metadata_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_public_ip(&self) -> anyhow::Result<String> {
        let body = self
            .client
            .get(&self.public_ip_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let ip = body.trim().to_string();
        anyhow::ensure!(!ip.is_empty(), "empty public IP response");
        Ok(ip)
    }

    /// EC2 instance identity document; only resolvable from inside an
    /// instance.
    async fn fetch_identity(&self) -> anyhow::Result<(Option<String>, Option<String>)> {
        let url = format!(
            "{}/latest/dynamic/instance-identity/document",
            self.metadata_url
        );
        let doc: serde_json::Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let instance_id = doc
            .get("instanceId")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let region = doc
            .get("region")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        Ok((instance_id, region))
    }
}

#[async_trait]
impl CloudProbe for AwsRepo {
    async fn collect(&self) -> AwsInfo {
        let (ip, identity) = tokio::join!(self.fetch_public_ip(), self.fetch_identity());
        let public_ip = match ip {
            Ok(ip) => Some(ip),
            Err(e) => {
                warn!(
                    error = %e,
                    operation = "fetch_public_ip",
                    "public IP lookup failed"
                );
                None
            }
        };
        // Metadata being unreachable is the normal case off-cloud; not
        // worth a warning every cycle.
        let (instance_id, region) = identity.unwrap_or((None, None));

        let available = public_ip.is_some() || instance_id.is_some();
        AwsInfo {
            available,
            error: (!available).then(|| "cloud metadata unreachable".to_string()),
            public_ip,
            instance_id,
            region,
        }
    }
}
