//! Markdown subset used by dashboard text elements.
//!
//! Supports ATX headings, thematic breaks, ordered and unordered list items,
//! paragraphs, `**strong**` spans and `[label](href)` links. Everything else is
//! kept as literal text and escaped on render.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public enum `MarkdownInline` in `econ-dashboard-ui`.
pub enum MarkdownInline {
    Text(String),
    Strong(String),
    Link { label: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public enum `MarkdownBlock` in `econ-dashboard-ui`.
pub enum MarkdownBlock {
    Heading {
        level: u8,
        inlines: Vec<MarkdownInline>,
    },
    Paragraph(Vec<MarkdownInline>),
    OrderedList {
        start: u64,
        items: Vec<Vec<MarkdownInline>>,
    },
    UnorderedList(Vec<Vec<MarkdownInline>>),
    ThematicBreak,
}

/// Strips the leading whitespace prefix shared by all non-blank lines.
pub fn dedent_markdown(source: &str) -> String {
    let common_prefix = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .reduce(|shared, prefix| {
            let matched = shared
                .char_indices()
                .zip(prefix.chars())
                .find(|((_, left), right)| left != right)
                .map_or(shared.len().min(prefix.len()), |((offset, _), _)| offset);
            &shared[..matched]
        })
        .unwrap_or("");
    source
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(common_prefix).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Default)]
struct BlockAccumulator {
    blocks: Vec<MarkdownBlock>,
    paragraph: Vec<String>,
    ordered: Option<(u64, Vec<Vec<MarkdownInline>>)>,
    unordered: Option<Vec<Vec<MarkdownInline>>>,
}

impl BlockAccumulator {
    fn flush(&mut self) {
        if !self.paragraph.is_empty() {
            let text = self.paragraph.join(" ");
            self.paragraph.clear();
            self.blocks
                .push(MarkdownBlock::Paragraph(parse_markdown_inlines(&text)));
        }
        if let Some((start, items)) = self.ordered.take() {
            self.blocks.push(MarkdownBlock::OrderedList { start, items });
        }
        if let Some(items) = self.unordered.take() {
            self.blocks.push(MarkdownBlock::UnorderedList(items));
        }
    }

    fn push_ordered_item(&mut self, number: u64, text: &str) {
        if self.ordered.is_none() {
            self.flush();
        }
        self.ordered
            .get_or_insert_with(|| (number, Vec::new()))
            .1
            .push(parse_markdown_inlines(text));
    }

    fn push_unordered_item(&mut self, text: &str) {
        if self.unordered.is_none() {
            self.flush();
        }
        self.unordered
            .get_or_insert_with(Vec::new)
            .push(parse_markdown_inlines(text));
    }

    fn push_text_line(&mut self, text: &str) {
        if self.ordered.is_some() || self.unordered.is_some() {
            self.flush();
        }
        self.paragraph.push(text.to_string());
    }

    fn push_block(&mut self, block: MarkdownBlock) {
        self.flush();
        self.blocks.push(block);
    }
}

/// Public `fn` `parse_markdown_blocks` in `econ-dashboard-ui`.
pub fn parse_markdown_blocks(source: &str) -> Vec<MarkdownBlock> {
    let dedented = dedent_markdown(source);
    let mut accumulator = BlockAccumulator::default();
    for line in dedented.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            accumulator.flush();
        } else if is_thematic_break(trimmed) {
            accumulator.push_block(MarkdownBlock::ThematicBreak);
        } else if let Some((level, text)) = split_atx_heading(trimmed) {
            accumulator.push_block(MarkdownBlock::Heading {
                level,
                inlines: parse_markdown_inlines(text),
            });
        } else if let Some((number, text)) = split_ordered_item(trimmed) {
            accumulator.push_ordered_item(number, text);
        } else if let Some(text) = split_unordered_item(trimmed) {
            accumulator.push_unordered_item(text);
        } else {
            accumulator.push_text_line(trimmed);
        }
    }
    accumulator.flush();
    accumulator.blocks
}

fn is_thematic_break(line: &str) -> bool {
    let marks = line
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<Vec<_>>();
    marks.len() >= 3
        && matches!(marks[0], '-' | '*' | '_')
        && marks.iter().all(|mark| *mark == marks[0])
}

fn split_atx_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|ch| *ch == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    let text = rest.trim().trim_end_matches('#').trim_end();
    Some((level as u8, text))
}

fn split_ordered_item(line: &str) -> Option<(u64, &str)> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let number = line[..digits].parse::<u64>().ok()?;
    let text = line[digits..].strip_prefix(". ")?;
    Some((number, text.trim()))
}

fn split_unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim)
}

/// Public `fn` `parse_markdown_inlines` in `econ-dashboard-ui`.
pub fn parse_markdown_inlines(text: &str) -> Vec<MarkdownInline> {
    let mut inlines = Vec::new();
    let mut buffer = String::new();
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**").filter(|end| *end > 0) {
                flush_text(&mut buffer, &mut inlines);
                inlines.push(MarkdownInline::Strong(after[..end].to_string()));
                rest = &after[end + 2..];
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix('[') {
            if let Some((label, href, remaining)) = split_markdown_link(after) {
                if is_allowed_markdown_href(href) {
                    flush_text(&mut buffer, &mut inlines);
                    inlines.push(MarkdownInline::Link {
                        label: label.to_string(),
                        href: href.to_string(),
                    });
                    rest = remaining;
                    continue;
                }
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            buffer.push(ch);
        }
        rest = chars.as_str();
    }
    flush_text(&mut buffer, &mut inlines);
    inlines
}

fn flush_text(buffer: &mut String, inlines: &mut Vec<MarkdownInline>) {
    if !buffer.is_empty() {
        inlines.push(MarkdownInline::Text(std::mem::take(buffer)));
    }
}

fn split_markdown_link(after_open: &str) -> Option<(&str, &str, &str)> {
    let label_end = after_open.find("](")?;
    let label = &after_open[..label_end];
    if label.trim().is_empty() || label.contains('[') {
        return None;
    }
    let target = &after_open[label_end + 2..];
    let href_end = target.find(')')?;
    let href = target[..href_end].trim();
    if href.is_empty() || href.contains(char::is_whitespace) {
        return None;
    }
    Some((label, href, &target[href_end + 1..]))
}

/// Accepts `http`, `https` and `mailto` links plus relative and fragment links.
pub fn is_allowed_markdown_href(href: &str) -> bool {
    let scheme_end = href.find(':');
    let path_start = href.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (Some(colon), Some(path)) if path < colon => true,
        (Some(colon), _) => {
            let scheme = href[..colon].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        (None, _) => true,
    }
}

fn markdown_inlines_view(inlines: Vec<MarkdownInline>) -> impl IntoView {
    inlines
        .into_iter()
        .map(|inline| match inline {
            MarkdownInline::Text(text) => text.into_any(),
            MarkdownInline::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
            MarkdownInline::Link { label, href } => view! {
                <a href=href target="_blank" rel="noopener noreferrer">{label}</a>
            }
            .into_any(),
        })
        .collect_view()
}

fn markdown_block_view(block: MarkdownBlock) -> AnyView {
    match block {
        MarkdownBlock::Heading { level, inlines } => {
            let content = markdown_inlines_view(inlines);
            match level {
                1 => view! { <h1>{content}</h1> }.into_any(),
                2 => view! { <h2>{content}</h2> }.into_any(),
                3 => view! { <h3>{content}</h3> }.into_any(),
                4 => view! { <h4>{content}</h4> }.into_any(),
                5 => view! { <h5>{content}</h5> }.into_any(),
                _ => view! { <h6>{content}</h6> }.into_any(),
            }
        }
        MarkdownBlock::Paragraph(inlines) => {
            view! { <p>{markdown_inlines_view(inlines)}</p> }.into_any()
        }
        MarkdownBlock::OrderedList { start, items } => {
            let start_attr = (start != 1).then(|| start.to_string());
            view! {
                <ol start=start_attr>
                    {items
                        .into_iter()
                        .map(|item| view! { <li>{markdown_inlines_view(item)}</li> })
                        .collect_view()}
                </ol>
            }
            .into_any()
        }
        MarkdownBlock::UnorderedList(items) => view! {
            <ul>
                {items
                    .into_iter()
                    .map(|item| view! { <li>{markdown_inlines_view(item)}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        MarkdownBlock::ThematicBreak => view! { <hr /> }.into_any(),
    }
}

pub(crate) fn markdown_view(source: &str) -> impl IntoView {
    parse_markdown_blocks(source)
        .into_iter()
        .map(markdown_block_view)
        .collect_view()
}

/// Renders a markdown body inside a `stMarkdown` container.
pub fn render_econ_dashboard_markdown(source: &str) -> String {
    let body = markdown_view(source);
    view! { <div class="stMarkdown" data-element="markdown">{body}</div> }.to_html()
}
