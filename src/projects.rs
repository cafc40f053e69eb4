// Derives the project list shown on the dashboard.
// Recomputed per request: a fresh git probe paired with the latest
// snapshot's container listing. Ids are positional, 1-based.

use crate::collector::RepoProbe;
use crate::models::{GithubInfo, ProjectView, Snapshot};

const PLACEHOLDER_NAME: &str = "demo-app";
const DEFAULT_BRANCH: &str = "main";

pub async fn derive(repo: &dyn RepoProbe, snapshot: &Snapshot) -> Vec<ProjectView> {
    let git = repo.collect().await;
    let branch = git
        .branch
        .clone()
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
    let last_commit = git.last_commit.as_ref().map(|c| c.short_hash.clone());

    let containers = &snapshot.docker_info.containers;
    if !containers.is_empty() {
        return containers
            .iter()
            .enumerate()
            .map(|(i, c)| ProjectView {
                id: (i + 1) as u32,
                name: c.name.clone(),
                branch: branch.clone(),
                status: if c.state.is_running() {
                    "running"
                } else {
                    "stopped"
                }
                .to_string(),
                container: Some(c.name.clone()),
                image: Some(c.image.clone()),
                last_commit: last_commit.clone(),
            })
            .collect();
    }

    if git.branch.is_some() {
        return vec![ProjectView {
            id: 1,
            name: repo_name(&git).unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            branch,
            status: "stopped".to_string(),
            container: None,
            image: None,
            last_commit,
        }];
    }

    // No usable git or Docker data; keep the dashboard populated.
    vec![ProjectView {
        id: 1,
        name: PLACEHOLDER_NAME.to_string(),
        branch: DEFAULT_BRANCH.to_string(),
        status: "unknown".to_string(),
        container: None,
        image: None,
        last_commit: None,
    }]
}

/// Repository name from the origin URL, e.g. "git@host:org/name.git" or
/// "https://host/org/name".
fn repo_name(git: &GithubInfo) -> Option<String> {
    let url = git.remote_url.as_deref()?;
    let tail = url.trim_end_matches('/').rsplit(['/', ':']).next()?;
    let name = tail.trim_end_matches(".git");
    (!name.is_empty()).then(|| name.to_string())
}
