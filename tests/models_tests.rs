// Model serialization tests (JSON camelCase, degraded defaults)

use deployboard::models::*;

#[test]
fn test_snapshot_serializes_wire_field_names() {
    let json = serde_json::to_value(Snapshot::default()).unwrap();
    for key in [
        "dockerInfo",
        "systemMetrics",
        "githubInfo",
        "awsInfo",
        "lastUpdated",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn test_default_snapshot_is_fully_degraded() {
    let snapshot = Snapshot::default();
    assert!(!snapshot.docker_info.running);
    assert!(snapshot.docker_info.error.is_some());
    assert!(snapshot.system_metrics.error.is_some());
    assert!(snapshot.github_info.error.is_some());
    assert!(!snapshot.aws_info.available);
    assert!(snapshot.aws_info.error.is_some());
}

#[test]
fn test_docker_degraded_defaults() {
    let info = DockerInfo::degraded("daemon gone");
    assert!(!info.running);
    assert_eq!(info.container_count, 0);
    assert_eq!(info.image_count, 0);
    assert!(info.containers.is_empty());
    assert_eq!(info.error.as_deref(), Some("daemon gone"));
}

#[test]
fn test_container_state_parses_docker_strings() {
    assert_eq!(ContainerState::from_docker("running"), ContainerState::Running);
    assert_eq!(ContainerState::from_docker("RUNNING"), ContainerState::Running);
    assert_eq!(ContainerState::from_docker("exited"), ContainerState::Exited);
    assert_eq!(ContainerState::from_docker("created"), ContainerState::Created);
    assert_eq!(ContainerState::from_docker("weird"), ContainerState::Unknown);
    assert_eq!(ContainerState::from_docker(""), ContainerState::Unknown);
}

#[test]
fn test_container_state_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ContainerState::Running).unwrap(),
        "\"running\""
    );
    let back: ContainerState = serde_json::from_str("\"paused\"").unwrap();
    assert_eq!(back, ContainerState::Paused);
}

#[test]
fn test_system_metrics_serialization_camel_case() {
    let json = serde_json::to_string(&SystemMetrics::degraded("x")).unwrap();
    assert!(json.contains("\"uptimeSecs\""));
    assert!(json.contains("\"loadAverage\""));
    assert!(json.contains("\"usagePercent\""));
}

#[test]
fn test_github_info_deserializes_from_empty_object() {
    let info: GithubInfo = serde_json::from_str("{}").unwrap();
    assert!(info.branch.is_none());
    assert!(info.workflows.is_empty());
    assert!(info.error.is_none());
}

#[test]
fn test_github_degraded_sets_error_only() {
    let info = GithubInfo::degraded("no git");
    assert_eq!(info.error.as_deref(), Some("no git"));
    assert!(info.branch.is_none());
    assert!(info.last_commit.is_none());
    assert!(info.workflows.is_empty());
}

#[test]
fn test_deploy_request_accepts_missing_fields() {
    let request: DeployRequest = serde_json::from_str("{}").unwrap();
    assert!(request.project_id.is_none());
    assert!(request.branch.is_none());

    let request: DeployRequest =
        serde_json::from_str(r#"{"projectId":"web","branch":"dev"}"#).unwrap();
    assert_eq!(request.project_id.as_deref(), Some("web"));
    assert_eq!(request.branch.as_deref(), Some("dev"));
}

#[test]
fn test_deploy_response_serialization_camel_case() {
    let response = DeployResponse {
        success: true,
        message: "ok".to_string(),
        deployment_id: "deploy_1_web".to_string(),
        project_id: "web".to_string(),
        branch: "main".to_string(),
        timestamp: "2026-08-01T10:00:00+00:00".to_string(),
        estimated_time: "30 seconds".to_string(),
    };
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"deploymentId\""));
    assert!(json.contains("\"projectId\""));
    assert!(json.contains("\"estimatedTime\""));
}

#[test]
fn test_project_view_roundtrip() {
    let project = ProjectView {
        id: 1,
        name: "shop-api".to_string(),
        branch: "main".to_string(),
        status: "running".to_string(),
        container: Some("shop-api".to_string()),
        image: Some("acme/shop-api:latest".to_string()),
        last_commit: Some("abc1234".to_string()),
    };
    let json = serde_json::to_string(&project).unwrap();
    assert!(json.contains("\"lastCommit\""));
    let back: ProjectView = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, project.id);
    assert_eq!(back.name, project.name);
}
