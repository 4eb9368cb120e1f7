// src/ui/styling.rs
//! Styling primitives for marquee widgets and their surrounding controls
//!
//! Colors are RGB565 for 16-bit embedded displays. To convert from 8-bit
//! RGB: R>>3, G>>2, B>>3.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

// ============================================================================
// Colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Surface color - slightly lighter than background
pub const COLOR_FOREGROUND: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);

/// Border/stroke color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(43 >> 3, 55 >> 2, 57 >> 3);

/// Accent - bright teal-green
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

/// Secondary accent - warm orange
pub const COLOR_ACCENT_SECONDARY: Rgb565 = Rgb565::new(200 >> 3, 145 >> 2, 85 >> 3);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary text
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// A cohesive color palette for consistent UI theming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Primary accent color - used for key interactive elements
    pub primary: Rgb565,

    /// Secondary accent color - used for less prominent actions
    pub secondary: Rgb565,

    /// Main background color
    pub background: Rgb565,

    /// Surface color for panels and disabled controls
    pub surface: Rgb565,

    /// Primary text color - high contrast
    pub text_primary: Rgb565,

    /// Secondary text color - lower contrast
    pub text_secondary: Rgb565,

    /// Border color for separators and outlines
    pub border: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Light text on dark backgrounds
    pub fn dark() -> Self {
        Self {
            primary: COLOR_ACCENT,
            secondary: COLOR_ACCENT_SECONDARY,
            background: COLOR_BACKGROUND,
            surface: COLOR_FOREGROUND,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            border: COLOR_STROKE,
        }
    }
}

// ============================================================================
// Style
// ============================================================================

/// Visual style configuration for a UI element
///
/// ```ignore
/// let style = Style::new()
///     .with_background(COLOR_FOREGROUND)
///     .with_border(COLOR_STROKE, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Background fill color (if any)
    pub background_color: Option<Rgb565>,

    /// Foreground/text color (if any)
    pub foreground_color: Option<Rgb565>,

    /// Border color (if any)
    pub border_color: Option<Rgb565>,

    /// Border width in pixels (0 = no border)
    pub border_width: u32,
}

impl Default for Style {
    /// White text, no background or border
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: Some(WHITE),
            border_color: None,
            border_width: 0,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Sets the border color and width. A width of 0 disables the border.
    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// Whether drawing this style produces any pixels for a background pass
    pub fn has_fill_or_border(&self) -> bool {
        self.background_color.is_some() || (self.border_color.is_some() && self.border_width > 0)
    }

    /// Converts this style to a `PrimitiveStyle` for embedded-graphics drawing
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border_color
            && self.border_width > 0
        {
            builder = builder.stroke_color(border).stroke_width(self.border_width);
        }

        builder.build()
    }
}

// ============================================================================
// Button Variants
// ============================================================================

/// Predefined button style variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Most prominent, used for main actions
    Primary,

    /// Less prominent than primary
    Secondary,

    /// Subtle emphasis with border
    Outline,
}

impl ButtonVariant {
    /// Converts the variant to a concrete style based on a color palette
    pub fn to_style(&self, palette: &ColorPalette) -> Style {
        match self {
            ButtonVariant::Primary => Style::new()
                .with_background(palette.primary)
                .with_foreground(WHITE),

            ButtonVariant::Secondary => Style::new()
                .with_background(palette.secondary)
                .with_foreground(WHITE),

            ButtonVariant::Outline => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_primary)
                .with_border(palette.border, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_has_no_fill() {
        assert!(!Style::default().has_fill_or_border());
    }

    #[test]
    fn test_zero_width_border_is_not_drawn() {
        let style = Style::new().with_border(COLOR_STROKE, 0);
        assert!(!style.has_fill_or_border());
        assert_eq!(style.to_primitive_style().stroke_color, None);
    }

    #[test]
    fn test_outline_variant_uses_palette_border() {
        let palette = ColorPalette::dark();
        let style = ButtonVariant::Outline.to_style(&palette);
        assert_eq!(style.border_color, Some(palette.border));
        assert_eq!(style.background_color, Some(palette.surface));
    }
}
