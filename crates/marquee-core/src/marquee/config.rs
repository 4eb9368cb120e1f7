// src/marquee/config.rs
//! Caller-supplied marquee configuration and host context
//!
//! [`MarqueeConfig`] is immutable per render pass and owned by the caller.
//! [`HostContext`] carries the display-wide values (density, layout
//! direction) that every marquee on a screen shares.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Device-independent pixels
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Dp(pub f32);

impl Dp {
    /// Convert to physical pixels at the given density
    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.0
    }
}

/// Physical pixels per device-independent pixel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density(pub f32);

impl Default for Density {
    fn default() -> Self {
        defaults::DENSITY
    }
}

/// Horizontal reading direction of the surrounding layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Left-to-right: content scrolls towards the left
    #[default]
    Ltr,
    /// Right-to-left: content scrolls towards the right
    Rtl,
}

impl LayoutDirection {
    pub fn toggled(self) -> Self {
        match self {
            LayoutDirection::Ltr => LayoutDirection::Rtl,
            LayoutDirection::Rtl => LayoutDirection::Ltr,
        }
    }
}

/// Display-wide context a marquee is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HostContext {
    pub density: Density,
    pub layout_direction: LayoutDirection,
}

impl HostContext {
    pub fn new(density: Density, layout_direction: LayoutDirection) -> Self {
        Self {
            density,
            layout_direction,
        }
    }
}

/// Per-marquee configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Whether scrolling is enabled
    pub scroll_enabled: bool,
    /// Scroll speed in dp per second
    pub speed: Dp,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            scroll_enabled: defaults::SCROLL_ENABLED,
            speed: defaults::SPEED,
        }
    }
}

impl MarqueeConfig {
    pub fn with_scroll_enabled(mut self, scroll_enabled: bool) -> Self {
        self.scroll_enabled = scroll_enabled;
        self
    }

    pub fn with_speed(mut self, speed: Dp) -> Self {
        self.speed = speed;
        self
    }

    /// Speed in physical pixels per second
    pub fn speed_px_per_sec(&self, context: &HostContext) -> f32 {
        self.speed.to_px(context.density)
    }
}
