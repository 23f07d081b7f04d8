//! Leptos SSR renderer for the Econometrics Solutions dashboard.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use leptos::attr::custom::CustomAttribute;
use leptos::prelude::*;

mod markdown;
mod page;
mod solutions_page;

pub use markdown::{
    dedent_markdown, is_allowed_markdown_href, parse_markdown_blocks, parse_markdown_inlines,
    render_econ_dashboard_markdown, MarkdownBlock, MarkdownInline,
};
pub use page::{
    EconDashboardContainer, EconDashboardElement, EconDashboardEmbeddedFrame,
    EconDashboardLayout, EconDashboardPage, EconDashboardPageBuilder, EconDashboardPageConfig,
    EconDashboardPageError, EconDashboardSidebarState, EconDashboardStyleBlock, EconDashboardTab,
};
pub use solutions_page::{
    build_econ_ps2_solutions_page, econ_ps2_page_config, ECON_PS2_EMBED_URL,
    ECON_PS2_FRAME_HEIGHT, ECON_PS2_GITHUB_URL, ECON_PS2_PAGE_ICON, ECON_PS2_PAGE_TITLE,
    ECON_PS2_SUBTITLE, ECON_PS2_TAB_LABELS,
};

use markdown::markdown_view;

const ECON_DASHBOARD_SHELL_CSS: &str = r#"
body { margin: 0; font-family: "Source Sans Pro", "Segoe UI", sans-serif; }
#econ-dashboard-app { display: flex; min-height: 100vh; }
#econ-dashboard-sidebar { order: -1; width: 21rem; padding: 1.5rem; box-sizing: border-box; background-color: rgba(255, 255, 255, 0.06); }
#econ-dashboard-app[data-sidebar-state="collapsed"] #econ-dashboard-sidebar { display: none; }
#econ-dashboard-main { flex: 1; padding: 1.5rem 3rem; box-sizing: border-box; }
#econ-dashboard-app[data-layout="centered"] #econ-dashboard-main { max-width: 46rem; margin: 0 auto; }
#econ-dashboard-sidebar-toggle { color: inherit; font-size: 0.85rem; }
.econ-dashboard-tabs nav { display: flex; gap: 1.5rem; border-bottom: 1px solid rgba(255, 255, 255, 0.2); }
.econ-dashboard-tabs nav a { color: inherit; text-decoration: none; padding: 0.5rem 0; }
.econ-dashboard-tabs nav a[aria-selected="true"] { border-bottom: 2px solid #ff4b4b; color: #ff4b4b; }
.econ-dashboard-tabs section[aria-hidden="true"] { display: none; }
.econ-dashboard-embedded-frame { width: 100%; border: none; }
.stMarkdown a { color: #4a9fff; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-request view state: which tab is active and whether the sidebar is open.
pub struct EconDashboardShellContext {
    pub active_tab: usize,
    pub sidebar_state: EconDashboardSidebarState,
}

impl EconDashboardShellContext {
    /// Initial view state declared by the page configuration.
    pub fn for_page(page: &EconDashboardPage) -> Self {
        Self {
            active_tab: 0,
            sidebar_state: page.config.initial_sidebar_state,
        }
    }
}

fn shell_href(tab: usize, sidebar_state: EconDashboardSidebarState) -> String {
    format!("/?tab={tab}&sidebar={}", sidebar_state.as_str())
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Browser tab title: icon glyph followed by the page title.
pub fn econ_dashboard_document_title(config: &EconDashboardPageConfig) -> String {
    if config.page_icon.is_empty() {
        config.page_title.clone()
    } else {
        format!("{} {}", config.page_icon, config.page_title)
    }
}

/// SVG favicon carrying the icon glyph, encoded as a data URI.
pub fn econ_dashboard_favicon_href(page_icon: &str) -> String {
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\"><text y=\".9em\" font-size=\"90\">{page_icon}</text></svg>"
    );
    format!(
        "data:image/svg+xml;base64,{}",
        BASE64_STANDARD.encode(svg.as_bytes())
    )
}

fn element_view(
    element: &EconDashboardElement,
    context: EconDashboardShellContext,
    tab_group: &mut usize,
) -> AnyView {
    match element {
        // Raw style blocks are hoisted into the document head.
        EconDashboardElement::Style(style) if style.unsafe_allow_html => ().into_any(),
        EconDashboardElement::Style(style) => view! {
            <div class="stMarkdown" data-element="markdown">
                <p>{style.css.clone()}</p>
            </div>
        }
        .into_any(),
        EconDashboardElement::Title(text) => {
            view! { <h1 class="econ-dashboard-title" data-element="title">{text.clone()}</h1> }
                .into_any()
        }
        EconDashboardElement::Header(text) => {
            view! { <h2 data-element="header">{text.clone()}</h2> }.into_any()
        }
        EconDashboardElement::Markdown(body) => view! {
            <div class="stMarkdown" data-element="markdown">{markdown_view(body)}</div>
        }
        .into_any(),
        EconDashboardElement::EmbeddedFrame(frame) => embedded_frame_view(frame),
        EconDashboardElement::Tabs(tabs) => {
            let group = *tab_group;
            *tab_group += 1;
            tabs_view(tabs, group, context)
        }
    }
}

fn embedded_frame_view(frame: &EconDashboardEmbeddedFrame) -> AnyView {
    let height_value = frame.height.to_string();
    let scrolling_value = if frame.scrolling { "auto" } else { "no" };
    // `scrolling` is not a typed iframe attribute.
    view! {
        <iframe
            class="econ-dashboard-embedded-frame"
            data-element="iframe"
            src=frame.url.clone()
            height=height_value
            width="100%"
        ></iframe>
    }
    .attr("scrolling", scrolling_value)
    .into_any()
}

fn tabs_view(
    tabs: &[EconDashboardTab],
    group: usize,
    context: EconDashboardShellContext,
) -> AnyView {
    let active = if context.active_tab < tabs.len() {
        context.active_tab
    } else {
        0
    };
    let group_id = format!("econ-dashboard-tabs-{group}");
    let tab_count_value = tabs.len().to_string();
    let active_tab_value = active.to_string();
    let mut nested_group = group + 1;

    let tab_links = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let tab_id = format!("econ-dashboard-tab-{group}-{index}");
            let panel_id = format!("econ-dashboard-tab-panel-{group}-{index}");
            let tab_index_value = index.to_string();
            let tab_href = shell_href(index, context.sidebar_state);
            view! {
                <a
                    id=tab_id
                    role="tab"
                    data-tab-index=tab_index_value
                    aria-selected=bool_attr(index == active)
                    aria-controls=panel_id
                    href=tab_href
                >
                    {tab.label.clone()}
                </a>
            }
        })
        .collect_view();

    let tab_panels = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let is_active = index == active;
            let panel_id = format!("econ-dashboard-tab-panel-{group}-{index}");
            let body = tab
                .body
                .elements()
                .iter()
                .map(|element| element_view(element, context, &mut nested_group))
                .collect_view();
            view! {
                <section
                    id=panel_id
                    role="tabpanel"
                    data-tab-label=tab.label.clone()
                    data-tab-active=bool_attr(is_active)
                    aria-hidden=bool_attr(!is_active)
                >
                    {body}
                </section>
            }
        })
        .collect_view();

    view! {
        <section
            id=group_id
            class="econ-dashboard-tabs"
            data-tab-count=tab_count_value
            data-active-tab=active_tab_value
        >
            <nav role="tablist" aria-label="Dashboard tabs">
                {tab_links}
            </nav>
            {tab_panels}
        </section>
    }
    .into_any()
}

/// Renders the `<body>` content for one request.
pub fn render_econ_dashboard_body(
    page: &EconDashboardPage,
    context: EconDashboardShellContext,
) -> String {
    let layout_attr = page.config.layout.as_str();
    let sidebar_state_attr = context.sidebar_state.as_str();
    let sidebar_hidden = bool_attr(context.sidebar_state == EconDashboardSidebarState::Collapsed);
    let sidebar_toggle_href = shell_href(context.active_tab, context.sidebar_state.toggled());
    let sidebar_toggle_target_state = context.sidebar_state.toggled().as_str();

    let mut tab_group = 0;
    let main_content = page
        .elements
        .iter()
        .map(|element| element_view(element, context, &mut tab_group))
        .collect_view();
    let sidebar_content = page
        .sidebar
        .elements()
        .iter()
        .map(|element| element_view(element, context, &mut tab_group))
        .collect_view();

    let shell = view! {
        <div
            id="econ-dashboard-app"
            class="stApp"
            data-app="econ-dashboard"
            data-layout=layout_attr
            data-sidebar-state=sidebar_state_attr
        >
            <main id="econ-dashboard-main" data-layout=layout_attr>
                <a
                    id="econ-dashboard-sidebar-toggle"
                    data-sidebar-target-state=sidebar_toggle_target_state
                    aria-controls="econ-dashboard-sidebar"
                    aria-expanded=context.sidebar_state.aria_expanded()
                    href=sidebar_toggle_href
                >
                    Toggle Sidebar
                </a>
                {main_content}
            </main>
            <aside
                id="econ-dashboard-sidebar"
                data-sidebar-state=sidebar_state_attr
                aria-hidden=sidebar_hidden
            >
                {sidebar_content}
            </aside>
        </div>
    };
    shell.to_html()
}

/// Renders the `<head>` content: metadata, favicon, and style blocks.
pub fn render_econ_dashboard_head(page: &EconDashboardPage) -> String {
    let document_title = econ_dashboard_document_title(&page.config);
    let favicon_href = econ_dashboard_favicon_href(&page.config.page_icon);
    let injected_styles = page
        .injected_styles()
        .map(|css| {
            let css = css.to_string();
            view! { <style data-econ-style="injected" inner_html=css></style> }
        })
        .collect_view();
    let head = view! {
        <meta charset="utf-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1" />
        <title>{document_title}</title>
        <link rel="icon" href=favicon_href />
        <style id="econ-dashboard-shell-style" inner_html=ECON_DASHBOARD_SHELL_CSS></style>
        {injected_styles}
    };
    head.to_html()
}

/// Renders a complete HTML document for one request.
pub fn render_econ_dashboard_document(
    page: &EconDashboardPage,
    context: EconDashboardShellContext,
) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>{}</head>\n<body data-layout=\"{}\">{}</body>\n</html>\n",
        render_econ_dashboard_head(page),
        page.config.layout.as_str(),
        render_econ_dashboard_body(page, context),
    )
}
