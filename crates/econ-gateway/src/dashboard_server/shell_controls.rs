use econ_dashboard_ui::{EconDashboardPage, EconDashboardShellContext, EconDashboardSidebarState};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct DashboardShellControlsQuery {
    #[serde(default)]
    tab: String,
    #[serde(default)]
    sidebar: String,
}

impl DashboardShellControlsQuery {
    /// Unknown tabs fall back to the first one; an empty sidebar value keeps
    /// the page's initial sidebar state.
    pub(super) fn shell_context(&self, page: &EconDashboardPage) -> EconDashboardShellContext {
        let initial = EconDashboardShellContext::for_page(page);
        EconDashboardShellContext {
            active_tab: self.active_tab(page.tab_labels().len()),
            sidebar_state: self.sidebar_state().unwrap_or(initial.sidebar_state),
        }
    }

    fn active_tab(&self, tab_count: usize) -> usize {
        self.tab
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|index| *index < tab_count)
            .unwrap_or(0)
    }

    fn sidebar_state(&self) -> Option<EconDashboardSidebarState> {
        match self.sidebar.trim() {
            "collapsed" => Some(EconDashboardSidebarState::Collapsed),
            "expanded" => Some(EconDashboardSidebarState::Expanded),
            _ => None,
        }
    }
}
