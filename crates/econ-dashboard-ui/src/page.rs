//! Ordered page model recorded by [`EconDashboardPageBuilder`].
//!
//! Rendering calls are recorded in the order they are made. The page
//! configuration call is special: it must come first and may only happen
//! once per page.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Enumerates supported `EconDashboardPageError` values.
pub enum EconDashboardPageError {
    #[error("page configuration must be the first rendering call")]
    PageConfigNotFirst,
    #[error("page configuration may only be set once")]
    PageConfigAlreadySet,
    #[error("tab group requires at least one label")]
    EmptyTabGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Public enum `EconDashboardLayout` in `econ-dashboard-ui`.
pub enum EconDashboardLayout {
    Centered,
    Wide,
}

impl EconDashboardLayout {
    /// Public `fn` `as_str` in `econ-dashboard-ui`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::Wide => "wide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Public enum `EconDashboardSidebarState` in `econ-dashboard-ui`.
pub enum EconDashboardSidebarState {
    Expanded,
    Collapsed,
}

impl EconDashboardSidebarState {
    /// Public `fn` `as_str` in `econ-dashboard-ui`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    pub(crate) fn aria_expanded(self) -> &'static str {
        match self {
            Self::Expanded => "true",
            Self::Collapsed => "false",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One-time page metadata: title, icon glyph, layout, and initial sidebar state.
pub struct EconDashboardPageConfig {
    pub page_title: String,
    pub page_icon: String,
    pub layout: EconDashboardLayout,
    pub initial_sidebar_state: EconDashboardSidebarState,
}

impl Default for EconDashboardPageConfig {
    fn default() -> Self {
        Self {
            page_title: "Dashboard".to_string(),
            page_icon: String::new(),
            layout: EconDashboardLayout::Centered,
            initial_sidebar_state: EconDashboardSidebarState::Expanded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `EconDashboardStyleBlock` in `econ-dashboard-ui`.
pub struct EconDashboardStyleBlock {
    pub css: String,
    /// When false the block is escaped and shown as text instead of applied.
    pub unsafe_allow_html: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `EconDashboardEmbeddedFrame` in `econ-dashboard-ui`.
pub struct EconDashboardEmbeddedFrame {
    pub url: String,
    pub height: u32,
    pub scrolling: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public enum `EconDashboardElement` in `econ-dashboard-ui`.
pub enum EconDashboardElement {
    Style(EconDashboardStyleBlock),
    Title(String),
    Header(String),
    Markdown(String),
    EmbeddedFrame(EconDashboardEmbeddedFrame),
    Tabs(Vec<EconDashboardTab>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Element list behind a tab panel or the sidebar.
pub struct EconDashboardContainer {
    elements: Vec<EconDashboardElement>,
}

impl EconDashboardContainer {
    /// Public `fn` `elements` in `econ-dashboard-ui`.
    pub fn elements(&self) -> &[EconDashboardElement] {
        &self.elements
    }

    /// Public `fn` `header` in `econ-dashboard-ui`.
    pub fn header(&mut self, text: impl Into<String>) -> &mut Self {
        self.elements.push(EconDashboardElement::Header(text.into()));
        self
    }

    /// Public `fn` `markdown` in `econ-dashboard-ui`.
    pub fn markdown(&mut self, body: impl Into<String>) -> &mut Self {
        self.elements
            .push(EconDashboardElement::Markdown(body.into()));
        self
    }

    /// Public `fn` `iframe` in `econ-dashboard-ui`.
    pub fn iframe(&mut self, url: impl Into<String>, height: u32, scrolling: bool) -> &mut Self {
        self.elements
            .push(EconDashboardElement::EmbeddedFrame(EconDashboardEmbeddedFrame {
                url: url.into(),
                height,
                scrolling,
            }));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `EconDashboardTab` in `econ-dashboard-ui`.
pub struct EconDashboardTab {
    pub label: String,
    pub body: EconDashboardContainer,
}

#[derive(Debug, Default)]
/// Records rendering calls for a single page pass.
pub struct EconDashboardPageBuilder {
    config: Option<EconDashboardPageConfig>,
    elements: Vec<EconDashboardElement>,
    sidebar: EconDashboardContainer,
    rendered: bool,
}

impl EconDashboardPageBuilder {
    /// Public `fn` `new` in `econ-dashboard-ui`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies page metadata. Fails once anything else has been rendered or when
    /// the configuration was already applied.
    pub fn set_page_config(
        &mut self,
        config: EconDashboardPageConfig,
    ) -> Result<(), EconDashboardPageError> {
        if self.config.is_some() {
            return Err(EconDashboardPageError::PageConfigAlreadySet);
        }
        if self.rendered {
            return Err(EconDashboardPageError::PageConfigNotFirst);
        }
        self.config = Some(config);
        Ok(())
    }

    /// Public `fn` `style` in `econ-dashboard-ui`.
    pub fn style(&mut self, css: impl Into<String>, unsafe_allow_html: bool) -> &mut Self {
        self.push(EconDashboardElement::Style(EconDashboardStyleBlock {
            css: css.into(),
            unsafe_allow_html,
        }))
    }

    /// Public `fn` `title` in `econ-dashboard-ui`.
    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(EconDashboardElement::Title(text.into()))
    }

    /// Public `fn` `header` in `econ-dashboard-ui`.
    pub fn header(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(EconDashboardElement::Header(text.into()))
    }

    /// Public `fn` `markdown` in `econ-dashboard-ui`.
    pub fn markdown(&mut self, body: impl Into<String>) -> &mut Self {
        self.push(EconDashboardElement::Markdown(body.into()))
    }

    /// Public `fn` `iframe` in `econ-dashboard-ui`.
    pub fn iframe(&mut self, url: impl Into<String>, height: u32, scrolling: bool) -> &mut Self {
        self.push(EconDashboardElement::EmbeddedFrame(
            EconDashboardEmbeddedFrame {
                url: url.into(),
                height,
                scrolling,
            },
        ))
    }

    /// Creates one tab per label and returns their bodies in label order.
    pub fn tabs<S: AsRef<str>>(
        &mut self,
        labels: &[S],
    ) -> Result<&mut [EconDashboardTab], EconDashboardPageError> {
        if labels.is_empty() {
            return Err(EconDashboardPageError::EmptyTabGroup);
        }
        let tabs = labels
            .iter()
            .map(|label| EconDashboardTab {
                label: label.as_ref().to_string(),
                body: EconDashboardContainer::default(),
            })
            .collect();
        self.push(EconDashboardElement::Tabs(tabs));
        let Some(EconDashboardElement::Tabs(tabs)) = self.elements.last_mut() else {
            return Err(EconDashboardPageError::EmptyTabGroup);
        };
        Ok(tabs.as_mut_slice())
    }

    /// Public `fn` `sidebar` in `econ-dashboard-ui`.
    pub fn sidebar(&mut self) -> &mut EconDashboardContainer {
        self.rendered = true;
        &mut self.sidebar
    }

    /// Public `fn` `build` in `econ-dashboard-ui`.
    pub fn build(self) -> EconDashboardPage {
        EconDashboardPage {
            config: self.config.unwrap_or_default(),
            elements: self.elements,
            sidebar: self.sidebar,
        }
    }

    fn push(&mut self, element: EconDashboardElement) -> &mut Self {
        self.rendered = true;
        self.elements.push(element);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully recorded page, ready to render any number of times.
pub struct EconDashboardPage {
    pub config: EconDashboardPageConfig,
    pub elements: Vec<EconDashboardElement>,
    pub sidebar: EconDashboardContainer,
}

impl EconDashboardPage {
    /// Public `fn` `tab_labels` in `econ-dashboard-ui`.
    pub fn tab_labels(&self) -> Vec<&str> {
        self.tab_groups()
            .flat_map(|tabs| tabs.iter().map(|tab| tab.label.as_str()))
            .collect()
    }

    /// Every embedded frame on the page, main content first, then sidebar.
    pub fn embedded_frames(&self) -> Vec<&EconDashboardEmbeddedFrame> {
        let mut frames = Vec::new();
        collect_frames(&self.elements, &mut frames);
        collect_frames(self.sidebar.elements(), &mut frames);
        frames
    }

    pub(crate) fn tab_groups(&self) -> impl Iterator<Item = &[EconDashboardTab]> {
        self.elements.iter().filter_map(|element| match element {
            EconDashboardElement::Tabs(tabs) => Some(tabs.as_slice()),
            _ => None,
        })
    }

    pub(crate) fn injected_styles(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|element| match element {
            EconDashboardElement::Style(style) if style.unsafe_allow_html => {
                Some(style.css.as_str())
            }
            _ => None,
        })
    }
}

fn collect_frames<'a>(
    elements: &'a [EconDashboardElement],
    frames: &mut Vec<&'a EconDashboardEmbeddedFrame>,
) {
    for element in elements {
        match element {
            EconDashboardElement::EmbeddedFrame(frame) => frames.push(frame),
            EconDashboardElement::Tabs(tabs) => {
                for tab in tabs {
                    collect_frames(tab.body.elements(), frames);
                }
            }
            _ => {}
        }
    }
}
