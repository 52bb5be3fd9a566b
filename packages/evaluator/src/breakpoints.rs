use serde::{Deserialize, Serialize};

/// Tablet styles apply at viewports up to this width.
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Mobile styles apply at viewports up to this width.
pub const MOBILE_MAX_WIDTH: u32 = 640;

pub const TABLET_PREFIX: &str = "bp-tablet-";
pub const MOBILE_PREFIX: &str = "bp-mobile-";

/// Active editing/rendering viewport. Desktop is the unprefixed base;
/// tablet and mobile read breakpoint-prefixed overrides first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Desktop,
    Tablet,
    Mobile,
}

impl Viewport {
    /// The key prefix carried by style overrides scoped to this viewport.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Viewport::Desktop => None,
            Viewport::Tablet => Some(TABLET_PREFIX),
            Viewport::Mobile => Some(MOBILE_PREFIX),
        }
    }

    /// Resolve the style key a write at this viewport should target.
    pub fn style_key(&self, key: &str) -> String {
        match self.prefix() {
            Some(prefix) => format!("{prefix}{key}"),
            None => key.to_string(),
        }
    }
}
