//! Dashboard server tests grouped by endpoint behavior.
use std::time::Duration;

use super::*;
use econ_dashboard_ui::{EconDashboardSidebarState, ECON_PS2_EMBED_URL, ECON_PS2_GITHUB_URL};
use reqwest::{Client, StatusCode};
use serde_json::Value;

fn test_state() -> Arc<EconDashboardServerState> {
    let page = build_econ_ps2_solutions_page().expect("solutions page");
    Arc::new(EconDashboardServerState::new(page))
}

async fn spawn_test_server(
    state: Arc<EconDashboardServerState>,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind ephemeral listener")?;
    let addr = listener.local_addr().context("resolve listener addr")?;
    let app = build_econ_dashboard_router(state);
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    Ok((addr, handle))
}

async fn fetch_page(addr: SocketAddr, query: &str) -> String {
    let response = Client::new()
        .get(format!("http://{addr}{DASHBOARD_PAGE_ENDPOINT}{query}"))
        .send()
        .await
        .expect("send request");
    assert_eq!(response.status(), StatusCode::OK);
    response.text().await.expect("read page body")
}

fn controls(tab: &str, sidebar: &str) -> DashboardShellControlsQuery {
    serde_json::from_value(serde_json::json!({ "tab": tab, "sidebar": sidebar }))
        .expect("controls query")
}

#[test]
fn unit_shell_controls_default_to_first_tab_and_page_sidebar_state() {
    let state = test_state();
    let context = DashboardShellControlsQuery::default().shell_context(&state.page);
    assert_eq!(context.active_tab, 0);
    assert_eq!(context.sidebar_state, EconDashboardSidebarState::Expanded);
}

#[test]
fn unit_shell_controls_resolve_valid_tab_and_sidebar_values() {
    let state = test_state();
    let context = controls(" 2 ", "collapsed").shell_context(&state.page);
    assert_eq!(context.active_tab, 2);
    assert_eq!(context.sidebar_state, EconDashboardSidebarState::Collapsed);
}

#[test]
fn regression_shell_controls_reject_out_of_range_and_malformed_tabs() {
    let state = test_state();
    assert_eq!(controls("3", "").shell_context(&state.page).active_tab, 0);
    assert_eq!(controls("-1", "").shell_context(&state.page).active_tab, 0);
    assert_eq!(controls("apple", "").shell_context(&state.page).active_tab, 0);
    assert_eq!(
        controls("", "sideways").shell_context(&state.page).sidebar_state,
        EconDashboardSidebarState::Expanded
    );
}

#[test]
fn unit_health_report_lists_three_identical_embedded_urls() {
    let state = test_state();
    let report = collect_econ_dashboard_health_report(&state.page);
    assert_eq!(report.status, "ok");
    assert_eq!(report.page_title, "Econometrics Solutions");
    assert_eq!(report.tab_count, 3);
    assert_eq!(
        report.tab_labels,
        vec!["Apple Style", "Palantir Style", "Pelgora Style"]
    );
    assert_eq!(report.embedded_urls, vec![ECON_PS2_EMBED_URL.to_string(); 3]);
}

#[test]
fn unit_render_default_document_matches_solutions_page() {
    let html = render_econ_dashboard_default_document().expect("render document");
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("data-active-tab=\"0\""));
    assert!(html.contains("data-sidebar-state=\"expanded\""));
}

#[test]
fn unit_render_health_json_is_valid_json() {
    let payload = render_econ_dashboard_health_json().expect("render health json");
    let value: Value = serde_json::from_str(&payload).expect("parse health json");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["tab_count"], 3);
}

#[tokio::test]
async fn functional_dashboard_endpoint_returns_html_document() {
    let (addr, handle) = spawn_test_server(test_state())
        .await
        .expect("spawn server");

    let response = Client::new()
        .get(format!("http://{addr}{DASHBOARD_PAGE_ENDPOINT}"))
        .send()
        .await
        .expect("send request");
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("text/html"));
    let body = response.text().await.expect("read page body");
    assert!(body.contains("<title>📊 Econometrics Solutions</title>"));
    assert!(body.contains(">Econometrics Solutions</h1>"));
    assert_eq!(body.matches(&format!("src=\"{ECON_PS2_EMBED_URL}\"")).count(), 3);
    assert!(body.contains(ECON_PS2_GITHUB_URL));

    handle.abort();
}

#[tokio::test]
async fn functional_dashboard_endpoint_applies_tab_and_sidebar_query() {
    let (addr, handle) = spawn_test_server(test_state())
        .await
        .expect("spawn server");

    let body = fetch_page(addr, "?tab=1&sidebar=collapsed").await;
    assert!(body.contains("data-active-tab=\"1\""));
    assert!(body.contains("data-sidebar-state=\"collapsed\""));
    assert!(body.contains("data-sidebar-target-state=\"expanded\""));

    handle.abort();
}

#[tokio::test]
async fn regression_dashboard_endpoint_falls_back_for_unknown_query_values() {
    let (addr, handle) = spawn_test_server(test_state())
        .await
        .expect("spawn server");

    let body = fetch_page(addr, "?tab=99&sidebar=sideways&unused=1").await;
    assert!(body.contains("data-active-tab=\"0\""));
    assert!(body.contains("data-sidebar-state=\"expanded\""));

    handle.abort();
}

#[tokio::test]
async fn functional_health_endpoint_reports_page_shape() {
    let (addr, handle) = spawn_test_server(test_state())
        .await
        .expect("spawn server");

    let response = Client::new()
        .get(format!("http://{addr}{DASHBOARD_HEALTH_ENDPOINT}"))
        .send()
        .await
        .expect("send request");
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = response.json().await.expect("parse health payload");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["tab_count"], 3);
    let urls = payload["embedded_urls"].as_array().expect("urls array");
    assert_eq!(urls.len(), 3);
    assert!(urls.iter().all(|url| url == ECON_PS2_EMBED_URL));

    handle.abort();
}

#[tokio::test]
async fn regression_unknown_route_returns_not_found() {
    let (addr, handle) = spawn_test_server(test_state())
        .await
        .expect("spawn server");

    let response = Client::new()
        .get(format!("http://{addr}/ops"))
        .send()
        .await
        .expect("send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    handle.abort();
}

#[tokio::test]
async fn regression_run_server_rejects_invalid_bind_address() {
    let error = run_econ_dashboard_server(EconDashboardServerConfig {
        bind: "not-an-address".to_string(),
    })
    .await
    .expect_err("invalid bind should fail");
    assert!(error.to_string().contains("invalid --bind 'not-an-address'"));
}
