// src/ui/mod.rs
//! UI building blocks shared by the marquee widgets
//!
//! This module provides:
//! - Core traits for drawable and touchable elements
//! - Touch event types forwarded from the touch controller or simulator
//! - Styling primitives (palette, style, button variants)
//! - A tap button used by hosts to toggle marquee settings

pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::Button;
pub use core::{Action, DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
pub use styling::{ButtonVariant, ColorPalette, Style};

/// Width of the reference display in pixels
pub const DISPLAY_WIDTH_PX: u16 = 320;

/// Height of the reference display in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 240;
