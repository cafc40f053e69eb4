// Git metadata probe: branch and last commit via the git CLI, workflow
// files straight off the filesystem.

use crate::collector::RepoProbe;
use crate::models::{CommitInfo, GithubInfo};
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::warn;

const WORKFLOWS_SUBDIR: &str = ".github/workflows";

pub struct GithubRepo {
    repo_dir: PathBuf,
}

impl GithubRepo {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    async fn git(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .await
            .context("git invocation failed")?;
        anyhow::ensure!(
            output.status.success(),
            "git {} exited with {}",
            args.first().copied().unwrap_or_default(),
            output.status
        );
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn gather_git(&self) -> anyhow::Result<(String, Option<CommitInfo>, Option<String>)> {
        let branch = self.git(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        let last_commit = match self
            .git(&["log", "-1", "--pretty=format:%H%n%s%n%an%n%cI"])
            .await
        {
            Ok(raw) => parse_commit(&raw),
            Err(e) => {
                warn!(error = %e, operation = "git_log", "last commit lookup failed");
                None
            }
        };
        let remote_url = self.git(&["remote", "get-url", "origin"]).await.ok();
        Ok((branch, last_commit, remote_url))
    }

    /// Workflow file listing works even when the git binary is missing.
    async fn list_workflows(&self) -> Vec<String> {
        let dir = self.repo_dir.join(WORKFLOWS_SUBDIR);
        let mut workflows = Vec::new();
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(_) => return workflows,
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".yml") || name.ends_with(".yaml") {
                workflows.push(name);
            }
        }
        workflows.sort();
        workflows
    }
}

/// Parse `git log --pretty=format:%H%n%s%n%an%n%cI` output.
fn parse_commit(raw: &str) -> Option<CommitInfo> {
    let mut lines = raw.lines();
    let hash = lines.next()?.trim().to_string();
    if hash.is_empty() {
        return None;
    }
    let message = lines.next().unwrap_or_default().to_string();
    let author = lines.next().unwrap_or_default().to_string();
    let date = lines.next().unwrap_or_default().to_string();
    Some(CommitInfo {
        short_hash: hash.chars().take(7).collect(),
        hash,
        message,
        author,
        date,
    })
}

#[async_trait]
impl RepoProbe for GithubRepo {
    async fn collect(&self) -> GithubInfo {
        let workflows = self.list_workflows().await;
        match self.gather_git().await {
            Ok((branch, last_commit, remote_url)) => GithubInfo {
                branch: Some(branch),
                last_commit,
                remote_url,
                workflows,
                error: None,
            },
            Err(e) => {
                warn!(
                    error = %e,
                    operation = "collect_git_metadata",
                    "git probe degraded"
                );
                GithubInfo {
                    workflows,
                    ..GithubInfo::degraded(e.to_string())
                }
            }
        }
    }
}
