//! # Pagecraft Editor
//!
//! Core document editing engine for Pagecraft.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: node tree + factory defaults        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle + mutations       │
//! │  - Load/save documents through PageStore    │
//! │  - Tree operations with invariant guards    │
//! │  - Bounded snapshot history (undo/redo)     │
//! │  - Debounced persistence + snapshots        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator + compilers: tree → HTML/CSS      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the source of truth**: observers re-render from the
//!    published value after every mutation
//! 2. **Stale ids are no-ops**: a cached UI reference must never crash the
//!    editor; the worst observable effect of an invalid operation is
//!    "nothing happened"
//! 3. **Snapshots are deep copies**: history entries and exports never
//!    alias live state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{EditSession, MemoryStore};
//! use pagecraft_schema::NodeType;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let session = EditSession::new(store);
//!
//! session.load(&project_id, &page_id).await?;
//! session.add_node(NodeType::Heading, None);
//! session.update_node(&id, |node| {
//!     node.styles.default.insert("color".into(), "#333".into());
//! });
//! let bundle = session.export_static().await?;
//! ```

mod assets;
mod debounce;
mod dnd;
mod errors;
mod history;
mod session;
mod store;
pub mod tree;

pub use assets::{AssetStore, MemoryAssets};
pub use debounce::Debouncer;
pub use dnd::DragPayload;
pub use errors::EditorError;
pub use history::{History, DEFAULT_HISTORY_CAP};
pub use session::{EditSession, SessionConfig, SessionEvent};
pub use store::{MemoryStore, PageStore, StoreError, VersionInfo};

// Re-export the schema types session callers always need.
pub use pagecraft_schema::{
    ContentEdit, Node, NodeType, PageDocument, PageSettingsPatch, ProjectData,
};
