//! Effective style resolution against a node's style map.
//!
//! Lookup order at a viewport: breakpoint-prefixed key, then the bare key,
//! then box-shorthand decomposition for side-specific margin/padding keys.

use crate::breakpoints::{Viewport, MOBILE_PREFIX, TABLET_PREFIX};
use crate::shorthand::{compose_border, extract_from_shorthand, parse_border, BorderParts, Side};
use pagecraft_schema::StyleMap;

/// Spacing shorthand family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingKind {
    Margin,
    Padding,
}

impl SpacingKind {
    pub fn property(&self) -> &'static str {
        match self {
            SpacingKind::Margin => "margin",
            SpacingKind::Padding => "padding",
        }
    }

    /// Side-specific camelCase key (`marginTop`, `paddingLeft`, ...).
    pub fn side_key(&self, side: Side) -> String {
        format!("{}{}", self.property(), side.suffix())
    }
}

fn side_from_key(key: &str, property: &str) -> Option<Side> {
    match key.strip_prefix(property)? {
        "Top" => Some(Side::Top),
        "Right" => Some(Side::Right),
        "Bottom" => Some(Side::Bottom),
        "Left" => Some(Side::Left),
        _ => None,
    }
}

/// Resolve the effective value of `key` at `viewport`.
///
/// The breakpoint-prefixed entry wins, then the bare entry. Side-specific
/// margin/padding keys fall back to decomposing the base shorthand.
pub fn style_value(styles: &StyleMap, key: &str, viewport: Viewport) -> Option<String> {
    let prefixed = viewport.style_key(key);
    if let Some(value) = styles.get(&prefixed).filter(|value| !value.is_empty()) {
        return Some(value.clone());
    }
    if let Some(value) = styles.get(key).filter(|value| !value.is_empty()) {
        return Some(value.clone());
    }
    for kind in [SpacingKind::Margin, SpacingKind::Padding] {
        if let Some(side) = side_from_key(key, kind.property()) {
            return styles
                .get(kind.property())
                .and_then(|shorthand| extract_from_shorthand(shorthand, side))
                .map(str::to_string);
        }
    }
    None
}

/// Merge base entries with the active viewport's overrides.
///
/// Base (non-prefixed, non-empty) entries always apply; entries carrying the
/// active viewport's prefix shadow same-named base entries with their prefix
/// stripped. Other viewports' entries are ignored.
pub fn computed_styles(styles: &StyleMap, viewport: Viewport) -> StyleMap {
    let mut computed = StyleMap::new();
    for (key, value) in styles {
        if value.is_empty() || key.starts_with(TABLET_PREFIX) || key.starts_with(MOBILE_PREFIX) {
            continue;
        }
        computed.insert(key.clone(), value.clone());
    }
    if let Some(prefix) = viewport.prefix() {
        for (key, value) in styles {
            if value.is_empty() {
                continue;
            }
            if let Some(stripped) = key.strip_prefix(prefix) {
                computed.insert(stripped.to_string(), value.clone());
            }
        }
    }
    computed
}

/// Write one spacing side at the active viewport.
///
/// With `linked` set, all four logical side keys (under the active
/// breakpoint prefix) receive the same value; otherwise only the targeted
/// side key is written.
pub fn write_spacing(
    styles: &mut StyleMap,
    kind: SpacingKind,
    side: Side,
    value: &str,
    linked: bool,
    viewport: Viewport,
) {
    if linked {
        for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
            styles.insert(viewport.style_key(&kind.side_key(side)), value.to_string());
        }
    } else {
        styles.insert(viewport.style_key(&kind.side_key(side)), value.to_string());
    }
}

/// The common value of all four sides, when they agree; used to populate a
/// linked-sides editor field.
pub fn linked_spacing_value(styles: &StyleMap, kind: SpacingKind, viewport: Viewport) -> Option<String> {
    let top = style_value(styles, &kind.side_key(Side::Top), viewport)?;
    for side in [Side::Right, Side::Bottom, Side::Left] {
        if style_value(styles, &kind.side_key(side), viewport).as_deref() != Some(top.as_str()) {
            return None;
        }
    }
    Some(top)
}

/// Decompose the effective `border` shorthand at a viewport.
pub fn border_parts(styles: &StyleMap, viewport: Viewport) -> BorderParts {
    style_value(styles, "border", viewport)
        .map(|border| parse_border(&border))
        .unwrap_or_default()
}

/// Write the `border` shorthand (with defaults for absent parts) at the
/// active viewport.
pub fn write_border(styles: &mut StyleMap, width: &str, style: &str, color: &str, viewport: Viewport) {
    styles.insert(
        viewport.style_key("border"),
        compose_border(width, style, color),
    );
}
