//! # Pagecraft HTML Compiler
//!
//! Serializes a page tree to standalone HTML: a pure recursive renderer
//! mapping each node type to its semantic tag, plus the export bundle
//! shapes consumed by the packaging layer.

mod compiler;
mod export;

pub use compiler::{render_component_html, render_node_html, render_page_html};
pub use export::{component_scaffold, ExportBundle, ExportFile};
