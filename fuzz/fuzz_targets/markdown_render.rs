#![no_main]

use econ_dashboard_ui::{
    is_allowed_markdown_href, parse_markdown_blocks, render_econ_dashboard_markdown,
    MarkdownBlock, MarkdownInline,
};
use libfuzzer_sys::fuzz_target;

fn assert_inlines_safe(inlines: &[MarkdownInline]) {
    for inline in inlines {
        if let MarkdownInline::Link { href, .. } = inline {
            assert!(is_allowed_markdown_href(href));
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);

    for block in parse_markdown_blocks(&raw) {
        match block {
            MarkdownBlock::Heading { level, inlines } => {
                assert!((1..=6).contains(&level));
                assert_inlines_safe(&inlines);
            }
            MarkdownBlock::Paragraph(inlines) => assert_inlines_safe(&inlines),
            MarkdownBlock::OrderedList { items, .. } | MarkdownBlock::UnorderedList(items) => {
                assert!(!items.is_empty());
                for item in &items {
                    assert_inlines_safe(item);
                }
            }
            MarkdownBlock::ThematicBreak => {}
        }
    }

    let html = render_econ_dashboard_markdown(&raw);
    assert!(html.starts_with("<div class=\"stMarkdown\""));
    assert!(!html.contains("<script"));
});
