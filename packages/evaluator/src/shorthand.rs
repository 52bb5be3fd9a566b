//! CSS box-shorthand parsing.
//!
//! Margin/padding shorthands follow the standard 1/2/3/4-token side rules;
//! borders split into width, style and a remainder color so multi-token
//! color functions survive a round trip.

/// One logical side of a box shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// CamelCase suffix used in side-specific style keys (`marginTop`).
    pub fn suffix(&self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Right => "Right",
            Side::Bottom => "Bottom",
            Side::Left => "Left",
        }
    }
}

/// Resolve one side's value out of a margin/padding shorthand string.
///
/// 1 token applies to all sides; 2 tokens are [vertical, horizontal];
/// 3 tokens are [top, horizontal, bottom]; 4 tokens are
/// [top, right, bottom, left]. Anything else resolves to nothing.
pub fn extract_from_shorthand(shorthand: &str, side: Side) -> Option<&str> {
    let parts: Vec<&str> = shorthand.split_whitespace().collect();
    match parts.len() {
        1 => Some(parts[0]),
        2 => match side {
            Side::Top | Side::Bottom => Some(parts[0]),
            Side::Right | Side::Left => Some(parts[1]),
        },
        3 => match side {
            Side::Top => Some(parts[0]),
            Side::Bottom => Some(parts[2]),
            Side::Right | Side::Left => Some(parts[1]),
        },
        4 => match side {
            Side::Top => Some(parts[0]),
            Side::Right => Some(parts[1]),
            Side::Bottom => Some(parts[2]),
            Side::Left => Some(parts[3]),
        },
        _ => None,
    }
}

/// Decomposed `border` shorthand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderParts {
    pub width: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
}

impl BorderParts {
    pub fn width_or_default(&self) -> &str {
        self.width.as_deref().unwrap_or("0px")
    }

    pub fn style_or_default(&self) -> &str {
        self.style.as_deref().unwrap_or("solid")
    }

    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or("#000000")
    }
}

/// Split a border shorthand into width, style and color.
///
/// The first two whitespace tokens are width and style; the remainder is
/// rejoined as the color, tolerating values like `rgba(0, 0, 0, 0.4)`.
pub fn parse_border(border: &str) -> BorderParts {
    let parts: Vec<&str> = border.split_whitespace().collect();
    let color = if parts.len() > 2 {
        Some(parts[2..].join(" "))
    } else {
        None
    };
    BorderParts {
        width: parts.first().map(|part| (*part).to_string()),
        style: parts.get(1).map(|part| (*part).to_string()),
        color,
    }
}

/// Join border parts back into a shorthand, defaulting absent parts to
/// `0px solid #000000`.
pub fn compose_border(width: &str, style: &str, color: &str) -> String {
    let width = if width.is_empty() { "0px" } else { width };
    let style = if style.is_empty() { "solid" } else { style };
    let color = if color.is_empty() { "#000000" } else { color };
    format!("{width} {style} {color}")
}
