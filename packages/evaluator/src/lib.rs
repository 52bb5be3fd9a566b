//! # Pagecraft Evaluator
//!
//! Style resolution for page node trees.
//!
//! Responsibilities:
//! - CSS box-shorthand expansion (`margin`/`padding`) and border
//!   decomposition/composition
//! - Per-breakpoint override layering (`bp-tablet-*` / `bp-mobile-*` keys
//!   shadow base entries at their viewport)
//! - Linked-sides spacing edits
//! - CSS text generation: per-node default rules, breakpoint media blocks
//!   and hover rules

mod breakpoints;
mod css;
mod resolver;
mod shorthand;

pub use breakpoints::{Viewport, MOBILE_MAX_WIDTH, MOBILE_PREFIX, TABLET_MAX_WIDTH, TABLET_PREFIX};
pub use css::{build_default_styles, build_hover_styles, collect_nodes, to_kebab_case};
pub use resolver::{
    border_parts, computed_styles, linked_spacing_value, style_value, write_border, write_spacing,
    SpacingKind,
};
pub use shorthand::{compose_border, extract_from_shorthand, parse_border, BorderParts, Side};
