use econ_dashboard_ui::{
    build_econ_ps2_solutions_page, render_econ_dashboard_document, EconDashboardShellContext,
    ECON_PS2_EMBED_URL, ECON_PS2_GITHUB_URL,
};
use econ_gateway::{render_econ_dashboard_default_document, render_econ_dashboard_health_json};
use serde_json::Value;

fn position_of(html: &str, marker: &str) -> usize {
    html.find(marker)
        .unwrap_or_else(|| panic!("missing marker {marker}"))
}

#[test]
fn integration_default_document_renders_sections_in_fixed_order() {
    let html = render_econ_dashboard_default_document().expect("render default document");

    let style = position_of(&html, "data-econ-style=\"injected\"");
    let title = position_of(&html, ">Econometrics Solutions</h1>");
    let subtitle = position_of(&html, "Problem Set 2 Solutions with Multiple Style Implementations");
    let apple = position_of(&html, "data-tab-label=\"Apple Style\"");
    let palantir = position_of(&html, "data-tab-label=\"Palantir Style\"");
    let pelgora = position_of(&html, "data-tab-label=\"Pelgora Style\"");
    let sidebar = position_of(&html, "id=\"econ-dashboard-sidebar\"");
    let github = position_of(&html, ECON_PS2_GITHUB_URL);

    assert!(style < title);
    assert!(title < subtitle);
    assert!(subtitle < apple);
    assert!(apple < palantir && palantir < pelgora);
    assert!(pelgora < sidebar && sidebar < github);
}

#[test]
fn integration_every_tab_state_keeps_the_same_three_frames() {
    let page = build_econ_ps2_solutions_page().expect("solutions page");
    let initial = EconDashboardShellContext::for_page(&page);
    let frame_marker = format!("src=\"{ECON_PS2_EMBED_URL}\"");
    for active_tab in 0..3 {
        let html = render_econ_dashboard_document(
            &page,
            EconDashboardShellContext {
                active_tab,
                ..initial
            },
        );
        assert_eq!(html.matches(frame_marker.as_str()).count(), 3);
        assert!(html.contains(&format!("data-active-tab=\"{active_tab}\"")));
    }
}

#[test]
fn integration_health_json_agrees_with_rendered_page() {
    let payload: Value = serde_json::from_str(
        &render_econ_dashboard_health_json().expect("render health json"),
    )
    .expect("parse health json");
    let html = render_econ_dashboard_default_document().expect("render default document");

    let labels = payload["tab_labels"].as_array().expect("tab labels");
    for label in labels {
        let label = label.as_str().expect("label string");
        assert!(html.contains(&format!(">{label}</a>")));
    }
    assert_eq!(payload["page_title"], "Econometrics Solutions");
}
