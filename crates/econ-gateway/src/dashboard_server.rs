use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use econ_dashboard_ui::{
    build_econ_ps2_solutions_page, render_econ_dashboard_document, EconDashboardPage,
};
use tokio::net::TcpListener;

mod health_status;
mod shell_controls;
#[cfg(test)]
mod tests;

pub use health_status::{collect_econ_dashboard_health_report, EconDashboardHealthReport};
use shell_controls::DashboardShellControlsQuery;

pub const DASHBOARD_PAGE_ENDPOINT: &str = "/";
pub const DASHBOARD_HEALTH_ENDPOINT: &str = "/healthz";
pub const DEFAULT_DASHBOARD_BIND: &str = "127.0.0.1:8501";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `EconDashboardServerConfig` in `econ-gateway`.
pub struct EconDashboardServerConfig {
    pub bind: String,
}

impl Default for EconDashboardServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_DASHBOARD_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct EconDashboardServerState {
    page: Arc<EconDashboardPage>,
}

impl EconDashboardServerState {
    fn new(page: EconDashboardPage) -> Self {
        Self {
            page: Arc::new(page),
        }
    }
}

/// Builds the solutions page once, then serves it until Ctrl-C.
pub async fn run_econ_dashboard_server(config: EconDashboardServerConfig) -> Result<()> {
    let bind_addr = config
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid --bind '{}'", config.bind))?;

    let page = build_econ_ps2_solutions_page().context("failed to build solutions page")?;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind dashboard server on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve bound dashboard server address")?;

    tracing::info!(
        addr = %local_addr,
        page_title = %page.config.page_title,
        tab_count = page.tab_labels().len(),
        "econ dashboard server listening"
    );

    let state = Arc::new(EconDashboardServerState::new(page));
    let app = build_econ_dashboard_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("econ dashboard server shutting down");
        })
        .await
        .context("econ dashboard server exited unexpectedly")?;

    Ok(())
}

fn build_econ_dashboard_router(state: Arc<EconDashboardServerState>) -> Router {
    Router::new()
        .route(DASHBOARD_PAGE_ENDPOINT, get(handle_dashboard_page))
        .route(DASHBOARD_HEALTH_ENDPOINT, get(handle_dashboard_health))
        .with_state(state)
}

async fn handle_dashboard_page(
    State(state): State<Arc<EconDashboardServerState>>,
    Query(controls): Query<DashboardShellControlsQuery>,
) -> Html<String> {
    let context = controls.shell_context(&state.page);
    tracing::debug!(
        active_tab = context.active_tab,
        sidebar = context.sidebar_state.as_str(),
        "rendering econ dashboard page"
    );
    Html(render_econ_dashboard_document(&state.page, context))
}

async fn handle_dashboard_health(
    State(state): State<Arc<EconDashboardServerState>>,
) -> impl IntoResponse {
    Json(collect_econ_dashboard_health_report(&state.page))
}

/// Renders the document a default request to `/` would receive.
pub fn render_econ_dashboard_default_document() -> Result<String> {
    let page = build_econ_ps2_solutions_page().context("failed to build solutions page")?;
    let context = DashboardShellControlsQuery::default().shell_context(&page);
    Ok(render_econ_dashboard_document(&page, context))
}

/// Pretty JSON of the `/healthz` payload.
pub fn render_econ_dashboard_health_json() -> Result<String> {
    let page = build_econ_ps2_solutions_page().context("failed to build solutions page")?;
    serde_json::to_string_pretty(&collect_econ_dashboard_health_report(&page))
        .context("failed to serialize dashboard health report")
}
