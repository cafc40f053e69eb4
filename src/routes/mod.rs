// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::collector::RepoProbe;
use crate::config::AppConfig;
use crate::state::DashboardState;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dashboard: Arc<DashboardState>,
    pub(crate) repo_probe: Arc<dyn RepoProbe>,
    pub(crate) config: AppConfig,
}

pub fn app(
    dashboard: Arc<DashboardState>,
    repo_probe: Arc<dyn RepoProbe>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        dashboard,
        repo_probe,
        config,
    };
    Router::new()
        .route("/api/health", get(http::health_handler)) // GET /api/health
        .route("/api/status", get(http::status_handler)) // GET /api/status
        .route("/api/projects", get(http::projects_handler)) // GET /api/projects
        .route("/api/system", get(http::system_handler)) // GET /api/system
        .route("/api/deploy", post(http::deploy_handler)) // POST /api/deploy
        .route("/api/deployments/{id}", get(http::deployment_log_handler)) // GET /api/deployments/:id
        .fallback(http::frontend_handler)
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
