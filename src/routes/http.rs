// Request handlers for the dashboard API

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use serde_json::json;

use super::AppState;
use crate::deploy;
use crate::error::ApiError;
use crate::models::{DeployRequest, DeployResponse};
use crate::projects;
use crate::version::{NAME, VERSION};

/// Bundled single-page frontend.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /api/health — liveness; 200 whenever the process is up, regardless
/// of probe availability.
pub(super) async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": state.dashboard.uptime_secs(),
        "systemUptime": sysinfo::System::uptime(),
        "environment": state.config.server.environment,
        "version": VERSION,
        "hostname": sysinfo::System::host_name().unwrap_or_default(),
        "platform": std::env::consts::OS,
    }))
}

/// GET /api/status — headline counters plus per-probe health.
pub(super) async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.dashboard.latest().await;
    let health = |ok: bool| if ok { "healthy" } else { "unavailable" };
    Json(json!({
        "message": format!("{} API running", NAME),
        "version": VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "deployments": state.dashboard.deployment_stats(),
        "systemHealth": {
            "docker": health(snapshot.docker_info.running),
            "github": health(snapshot.github_info.branch.is_some()),
            "aws": health(snapshot.aws_info.available),
        },
    }))
}

/// GET /api/projects — recomputed on every call.
pub(super) async fn projects_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.dashboard.latest().await;
    let list = projects::derive(state.repo_probe.as_ref(), &snapshot).await;
    Json(list)
}

/// GET /api/system — the raw snapshot.
pub(super) async fn system_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.latest().await)
}

/// POST /api/deploy — fabricated: counts the attempt synchronously,
/// schedules a delayed random outcome, responds "initiated" immediately.
pub(super) async fn deploy_handler(
    State(state): State<AppState>,
    body: Result<Json<DeployRequest>, JsonRejection>,
) -> Result<Json<DeployResponse>, ApiError> {
    // A missing or malformed body is treated like a missing projectId.
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let project_id = match request.project_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(ApiError::BadRequest("projectId is required".to_string())),
    };
    let branch = request
        .branch
        .filter(|b| !b.trim().is_empty())
        .unwrap_or_else(|| "main".to_string());

    let deployment_id = deploy::deployment_id(&project_id);
    state.dashboard.record_attempt();
    // Fire and forget; the response does not wait for the outcome.
    let _ = deploy::spawn_outcome(
        state.dashboard.clone(),
        deployment_id.clone(),
        &state.config.deploy,
    );
    tracing::info!(
        deployment_id = %deployment_id,
        project_id = %project_id,
        branch = %branch,
        operation = "initiate_deployment",
        "Deployment initiated"
    );

    Ok(Json(DeployResponse {
        success: true,
        message: format!("Deployment of {} initiated", project_id),
        deployment_id,
        project_id,
        branch,
        timestamp: chrono::Utc::now().to_rfc3339(),
        estimated_time: deploy::ESTIMATED_TIME.to_string(),
    }))
}

/// GET /api/deployments/{id} — canned transcript; the id is echoed back,
/// never validated.
pub(super) async fn deployment_log_handler(Path(id): Path<String>) -> impl IntoResponse {
    Json(deploy::demo_log(&id))
}

/// Catch-all: the bundled frontend for anything outside /api, JSON 404
/// inside it.
pub(super) async fn frontend_handler(uri: Uri) -> impl IntoResponse {
    if uri.path() == "/api" || uri.path().starts_with("/api/") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "not found" })),
        )
            .into_response();
    }
    Html(INDEX_HTML).into_response()
}
