// Docker container/image listing via bollard

use crate::collector::ContainerProbe;
use crate::models::{ContainerState, ContainerSummary, DockerInfo};
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::{ListContainersOptions, ListImagesOptions};
use std::collections::HashMap;
use tracing::warn;

pub struct DockerRepo {
    docker: Option<Docker>,
}

impl DockerRepo {
    /// An unreachable daemon degrades the probe instead of failing startup.
    pub fn connect() -> Self {
        match Docker::connect_with_unix_defaults() {
            Ok(docker) => Self {
                docker: Some(docker),
            },
            Err(e) => {
                warn!(
                    error = %e,
                    operation = "docker_connect",
                    "Docker unavailable; container probe will report degraded results"
                );
                Self { docker: None }
            }
        }
    }

    async fn gather(&self, docker: &Docker) -> anyhow::Result<DockerInfo> {
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), vec!["running".to_string()]);

        let filter = ListContainersOptions {
            all: false,
            filters: Some(filters),
            ..Default::default()
        };

        let listed = docker.list_containers(Some(filter)).await?;
        let containers: Vec<ContainerSummary> = listed
            .iter()
            .map(|c| {
                let id = c.id.as_ref().cloned().unwrap_or_default();
                let name = c
                    .names
                    .as_ref()
                    .and_then(|n| n.first())
                    .cloned()
                    .unwrap_or_else(|| id.clone());
                let state = c
                    .state
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                ContainerSummary {
                    id: id.chars().take(12).collect(),
                    name: name.trim_start_matches('/').to_string(),
                    image: c.image.clone().unwrap_or_default(),
                    state: ContainerState::from_docker(&state),
                    status: c.status.clone().unwrap_or_default(),
                }
            })
            .collect();

        let images = docker
            .list_images(Some(ListImagesOptions::default()))
            .await?;
        let version = docker.version().await.ok().and_then(|v| v.version);

        Ok(DockerInfo {
            running: true,
            container_count: containers.len() as u32,
            image_count: images.len() as u32,
            version,
            containers,
            error: None,
        })
    }
}

#[async_trait]
impl ContainerProbe for DockerRepo {
    async fn collect(&self) -> DockerInfo {
        let Some(docker) = &self.docker else {
            return DockerInfo::degraded("docker daemon unavailable");
        };
        match self.gather(docker).await {
            Ok(info) => info,
            Err(e) => {
                warn!(
                    error = %e,
                    operation = "collect_containers",
                    "container probe failed"
                );
                DockerInfo::degraded(e.to_string())
            }
        }
    }
}
