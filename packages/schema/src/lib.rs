//! # Pagecraft Schema
//!
//! Data model for Pagecraft page documents.
//!
//! A page is a tree of typed [`Node`]s rooted in a [`PageDocument`]. Nodes
//! carry per-breakpoint style maps and a typed content payload; documents
//! carry page-level settings and timestamps. This crate also owns the node
//! factory ([`create_node`]) and the layout presets that assemble multiple
//! factory nodes into fixed compositions.
//!
//! The serialized JSON shape of [`PageDocument`] is the canonical
//! interchange schema: camelCase keys, `children`/`content`/`meta` omitted
//! when absent.

mod document;
mod factory;
mod id;
mod node;
pub mod presets;

pub use document::{
    now_ms, PageDocument, PageSettings, PageSettingsPatch, ProjectData, SchemaError,
};
pub use factory::{create_default_root, create_node, create_page_document};
pub use id::generate_id;
pub use node::{
    ContentEdit, HeadingTag, LinkTarget, Node, NodeContent, NodeMeta, NodeStyles, NodeType,
    StyleMap,
};
