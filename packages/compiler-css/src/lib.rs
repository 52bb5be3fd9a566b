//! # Pagecraft CSS Compiler
//!
//! Assembles the page-level stylesheet: base reset, per-node default rules,
//! breakpoint media blocks and hover rules, with empty sections omitted.

use pagecraft_evaluator::{build_default_styles, build_hover_styles};
use pagecraft_schema::PageDocument;

/// Compile the standalone stylesheet for a static export.
pub fn compile_page_css(page: &PageDocument) -> String {
    let base = format!(
        "body {{ margin: 0; }} .page-root {{ min-height: 100vh; font-family: {}; color: {}; background: {}; }}",
        page.settings.primary_font, page.settings.base_text_color, page.settings.base_bg
    );
    join_sections(base, page)
}

/// Compile the component-scoped stylesheet for a component export.
pub fn compile_component_scss(page: &PageDocument) -> String {
    let base = format!(
        ":host {{ display: block; }} .page-root {{ min-height: 100vh; font-family: {}; color: {}; background: {}; }}",
        page.settings.primary_font, page.settings.base_text_color, page.settings.base_bg
    );
    join_sections(base, page)
}

fn join_sections(base: String, page: &PageDocument) -> String {
    let defaults = build_default_styles(&page.root);
    let hover = build_hover_styles(&page.root);
    [base, defaults, hover]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
