// src/ui/components/button.rs
//! Tap button used to drive marquee settings (pause/resume, direction, ...)

use crate::ui::core::{
    Action, DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::styling::{ButtonVariant, ColorPalette, Style};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};

/// Button state
#[derive(Debug, Clone, Copy, PartialEq)]
enum ButtonState {
    Normal,
    Pressed,
    Disabled,
}

/// Button component with a label and an action
///
/// # Touch Behavior
/// - Press inside the bounds arms the button
/// - Dragging outside disarms it, dragging back re-arms it
/// - Release while armed triggers the action (tap semantics)
///
/// # Examples
/// ```ignore
/// let button = Button::new(
///     Rectangle::new(Point::new(8, 8), Size::new(90, 32)),
///     "Pause",
///     Action::ToggleSetting(0),
/// )
/// .with_variant(ButtonVariant::Primary);
/// ```
pub struct Button {
    bounds: Rectangle,
    label: heapless::String<32>,
    action: Action,
    state: ButtonState,
    variant: ButtonVariant,
    palette: ColorPalette,
    border_radius: u32,
    /// A gesture that started on this button is in flight
    tracking: bool,
    dirty: bool,
}

impl Button {
    /// Create a new button. Labels longer than 32 bytes are dropped.
    pub fn new(bounds: Rectangle, label: &str, action: Action) -> Self {
        let mut label_string = heapless::String::new();
        label_string.push_str(label).ok();

        Self {
            bounds,
            label: label_string,
            action,
            state: ButtonState::Normal,
            variant: ButtonVariant::Primary,
            palette: ColorPalette::default(),
            border_radius: 8,
            tracking: false,
            dirty: true,
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self.dirty = true;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    /// Replace the label, marking the button dirty if it changed
    pub fn set_label(&mut self, label: &str) {
        let mut new_label = heapless::String::new();
        new_label.push_str(label).ok();

        if self.label != new_label {
            self.label = new_label;
            self.dirty = true;
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Enable or disable the button.
    ///
    /// Disabled buttons don't respond to touch and are rendered with dimmed colors.
    pub fn set_enabled(&mut self, enabled: bool) {
        let new_state = if enabled {
            ButtonState::Normal
        } else {
            ButtonState::Disabled
        };

        if self.state != new_state {
            self.state = new_state;
            self.dirty = true;
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.state, ButtonState::Disabled)
    }

    fn set_state(&mut self, state: ButtonState) {
        if self.state != state {
            self.state = state;
            self.dirty = true;
        }
    }

    fn get_style(&self) -> Style {
        let base_style = self.variant.to_style(&self.palette);

        match self.state {
            ButtonState::Normal => base_style,
            ButtonState::Pressed => {
                // Darken the background for pressed state
                let bg = base_style.background_color.unwrap_or(self.palette.primary);
                let darkened = Rgb565::new(
                    bg.r().saturating_sub(4),
                    bg.g().saturating_sub(8),
                    bg.b().saturating_sub(4),
                );
                base_style.with_background(darkened)
            }
            ButtonState::Disabled => base_style
                .with_background(self.palette.surface)
                .with_foreground(self.palette.text_secondary),
        }
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let style = self.get_style();

        let corner_radius = Size::new(self.border_radius, self.border_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner_radius)
            .into_styled(style.to_primitive_style())
            .draw(display)?;

        let text_color = style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(&FONT_6X10, text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(TextAlignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.label, self.bounds.center(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.dirty {
            Some(DirtyRegion::new(self.bounds))
        } else {
            None
        }
    }
}

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if !self.is_enabled() {
            return TouchResult::NotHandled;
        }

        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.tracking = true;
                self.set_state(ButtonState::Pressed);
                TouchResult::Handled
            }
            TouchEvent::Drag(point) if self.tracking => {
                let new_state = if self.contains_point(point) {
                    ButtonState::Pressed
                } else {
                    ButtonState::Normal
                };
                self.set_state(new_state);
                TouchResult::Handled
            }
            TouchEvent::Release(point) if self.tracking => {
                self.tracking = false;
                self.set_state(ButtonState::Normal);
                if self.contains_point(point) {
                    TouchResult::Action(self.action)
                } else {
                    TouchResult::Handled
                }
            }
            TouchEvent::Cancel => {
                self.tracking = false;
                self.set_state(ButtonState::Normal);
                TouchResult::NotHandled
            }
            _ => TouchResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        Button::new(
            Rectangle::new(Point::new(10, 10), Size::new(80, 30)),
            "Pause",
            Action::ToggleSetting(0),
        )
    }

    #[test]
    fn test_tap_triggers_action_on_release() {
        let mut b = button();
        assert_eq!(
            b.handle_touch(TouchEvent::Press(TouchPoint::new(20, 20))),
            TouchResult::Handled
        );
        assert_eq!(
            b.handle_touch(TouchEvent::Release(TouchPoint::new(21, 20))),
            TouchResult::Action(Action::ToggleSetting(0))
        );
    }

    #[test]
    fn test_release_outside_does_not_trigger() {
        let mut b = button();
        b.handle_touch(TouchEvent::Press(TouchPoint::new(20, 20)));
        b.handle_touch(TouchEvent::Drag(TouchPoint::new(200, 20)));
        assert_eq!(
            b.handle_touch(TouchEvent::Release(TouchPoint::new(200, 20))),
            TouchResult::Handled
        );
    }

    #[test]
    fn test_drag_back_inside_rearms() {
        let mut b = button();
        b.handle_touch(TouchEvent::Press(TouchPoint::new(20, 20)));
        b.handle_touch(TouchEvent::Drag(TouchPoint::new(200, 20)));
        b.handle_touch(TouchEvent::Drag(TouchPoint::new(30, 20)));
        assert_eq!(
            b.handle_touch(TouchEvent::Release(TouchPoint::new(30, 20))),
            TouchResult::Action(Action::ToggleSetting(0))
        );
    }

    #[test]
    fn test_press_outside_is_not_handled() {
        let mut b = button();
        assert_eq!(
            b.handle_touch(TouchEvent::Press(TouchPoint::new(200, 200))),
            TouchResult::NotHandled
        );
    }

    #[test]
    fn test_disabled_button_ignores_touch() {
        let mut b = button();
        b.set_enabled(false);
        assert_eq!(
            b.handle_touch(TouchEvent::Press(TouchPoint::new(20, 20))),
            TouchResult::NotHandled
        );
    }

    #[test]
    fn test_set_label_marks_dirty_only_on_change() {
        let mut b = button();
        b.mark_clean();
        b.set_label("Pause");
        assert!(!b.is_dirty());
        b.set_label("Resume");
        assert!(b.is_dirty());
        assert_eq!(b.label(), "Resume");
    }
}
