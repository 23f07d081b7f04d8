//! Liveness payload for `/healthz`.

use econ_dashboard_ui::EconDashboardPage;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Public struct `EconDashboardHealthReport` in `econ-gateway`.
pub struct EconDashboardHealthReport {
    pub status: &'static str,
    pub page_title: String,
    pub tab_count: usize,
    pub tab_labels: Vec<String>,
    pub embedded_urls: Vec<String>,
}

/// Public `fn` `collect_econ_dashboard_health_report` in `econ-gateway`.
pub fn collect_econ_dashboard_health_report(
    page: &EconDashboardPage,
) -> EconDashboardHealthReport {
    let tab_labels = page
        .tab_labels()
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    EconDashboardHealthReport {
        status: "ok",
        page_title: page.config.page_title.clone(),
        tab_count: tab_labels.len(),
        tab_labels,
        embedded_urls: page
            .embedded_frames()
            .into_iter()
            .map(|frame| frame.url.clone())
            .collect(),
    }
}
