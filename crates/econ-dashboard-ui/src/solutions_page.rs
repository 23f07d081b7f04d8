//! Problem Set 2 solutions page: fixed text plus three tabs embedding the
//! hosted solutions application.

use crate::page::{
    EconDashboardLayout, EconDashboardPage, EconDashboardPageBuilder, EconDashboardPageConfig,
    EconDashboardPageError, EconDashboardSidebarState,
};

pub const ECON_PS2_PAGE_TITLE: &str = "Econometrics Solutions";
pub const ECON_PS2_PAGE_ICON: &str = "📊";
pub const ECON_PS2_SUBTITLE: &str = "Problem Set 2 Solutions with Multiple Style Implementations";
pub const ECON_PS2_EMBED_URL: &str = "https://gordongekko-p.github.io/applie_econ_PS2";
pub const ECON_PS2_GITHUB_URL: &str = "https://github.com/GordonGekko-P/applie_econ_PS2";
pub const ECON_PS2_FRAME_HEIGHT: u32 = 800;
pub const ECON_PS2_TAB_LABELS: [&str; 3] = ["Apple Style", "Palantir Style", "Pelgora Style"];

const ECON_PS2_TAB_HEADINGS: [&str; 3] = [
    "### Apple-inspired Design",
    "### Palantir-inspired Design",
    "### Pelgora-inspired Design",
];

const ECON_PS2_STYLE_CSS: &str = r#"
    .stApp {
        background-color: #000000;
        color: #ffffff;
    }
    .stMarkdown {
        color: #ffffff;
    }
"#;

const ECON_PS2_ABOUT_MARKDOWN: &str = r#"
    This application provides solutions to Problem Set 2 with three different styling implementations:

    1. **Apple Style**: Clean, minimal, and elegant
    2. **Palantir Style**: Data-focused and professional
    3. **Pelgora Style**: Modern and dynamic

    Each implementation maintains the same content while demonstrating different approaches to UI/UX design.
"#;

const ECON_PS2_NAVIGATION_MARKDOWN: &str = r#"
    - Use the tabs above to switch between different style implementations
    - Each implementation includes all 5 tasks from Problem Set 2
    - Solutions include detailed explanations and mathematical formulas
"#;

/// Page metadata applied before anything else is rendered.
pub fn econ_ps2_page_config() -> EconDashboardPageConfig {
    EconDashboardPageConfig {
        page_title: ECON_PS2_PAGE_TITLE.to_string(),
        page_icon: ECON_PS2_PAGE_ICON.to_string(),
        layout: EconDashboardLayout::Wide,
        initial_sidebar_state: EconDashboardSidebarState::Expanded,
    }
}

/// Records the full solutions page in a single sequential pass.
///
/// Every tab embeds the same hosted application; only the heading differs.
pub fn build_econ_ps2_solutions_page() -> Result<EconDashboardPage, EconDashboardPageError> {
    let mut page = EconDashboardPageBuilder::new();
    page.set_page_config(econ_ps2_page_config())?;

    page.style(ECON_PS2_STYLE_CSS, true)
        .title(ECON_PS2_PAGE_TITLE)
        .markdown(format!("### {ECON_PS2_SUBTITLE}"));

    let tabs = page.tabs(&ECON_PS2_TAB_LABELS)?;
    for (tab, heading) in tabs.iter_mut().zip(ECON_PS2_TAB_HEADINGS) {
        tab.body
            .markdown(heading)
            .iframe(ECON_PS2_EMBED_URL, ECON_PS2_FRAME_HEIGHT, true);
    }

    page.sidebar()
        .header("About")
        .markdown(ECON_PS2_ABOUT_MARKDOWN)
        .header("Navigation")
        .markdown(ECON_PS2_NAVIGATION_MARKDOWN)
        .markdown("---")
        .markdown(format!("[View on GitHub]({ECON_PS2_GITHUB_URL})"));

    Ok(page.build())
}
