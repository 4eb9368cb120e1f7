// src/marquee/interactive.rs
//! Touch interaction for marquees
//!
//! [`InteractiveMarquee`] wraps a [`Marquee`] and pauses it while the user
//! touches it. A horizontal drag past the touch slop moves the content by
//! hand; every drag delta is consumed, so drags never reach a parent
//! scrollable. The wrapped marquee knows nothing about touch.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::trace;

use super::defaults;
use super::widget::Marquee;
use crate::ui::core::{DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};

// ---------------------------------------------------------------------------
// Gesture tracking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    /// No pointer down, or the drag recognizer is disabled for this gesture
    Idle,
    /// Pointer down, still within the touch slop
    Pending { start_x: i32 },
    /// Drag in progress; deltas are measured from `last_x`
    Dragging { last_x: i32 },
}

/// What a touch event did to the gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureOutcome {
    /// The event belonged to a gesture on this element
    pub consumed: bool,
    /// Horizontal drag delta to apply to the offset
    pub drag_delta: Option<f32>,
}

/// Press and horizontal-drag recognizer
#[derive(Debug, Clone)]
pub struct GestureTracker {
    pressed: bool,
    drag: DragState,
    touch_slop_px: f32,
}

impl GestureTracker {
    pub fn new(touch_slop_px: f32) -> Self {
        Self {
            pressed: false,
            drag: DragState::Idle,
            touch_slop_px,
        }
    }

    pub fn set_touch_slop(&mut self, touch_slop_px: f32) {
        self.touch_slop_px = touch_slop_px;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// `pressed || drag in progress`
    pub fn is_paused(&self) -> bool {
        self.pressed || self.is_dragging()
    }

    /// Feed one touch event.
    ///
    /// `inside` says whether a `Press` landed on the element; later events of
    /// the same gesture are tracked wherever they land. With `drag_enabled`
    /// false the press is still tracked but no drag deltas are produced.
    pub fn on_event(
        &mut self,
        event: TouchEvent,
        inside: bool,
        drag_enabled: bool,
    ) -> GestureOutcome {
        match event {
            TouchEvent::Press(point) => {
                if !inside {
                    return GestureOutcome::default();
                }
                self.pressed = true;
                self.drag = if drag_enabled {
                    DragState::Pending {
                        start_x: point.x as i32,
                    }
                } else {
                    DragState::Idle
                };
                GestureOutcome {
                    consumed: true,
                    drag_delta: None,
                }
            }
            TouchEvent::Drag(point) => {
                if !self.pressed {
                    return GestureOutcome::default();
                }
                GestureOutcome {
                    consumed: true,
                    drag_delta: self.track_drag(point),
                }
            }
            TouchEvent::Release(_) | TouchEvent::Cancel => {
                let consumed = self.pressed;
                self.pressed = false;
                self.drag = DragState::Idle;
                GestureOutcome {
                    consumed,
                    drag_delta: None,
                }
            }
        }
    }

    fn track_drag(&mut self, point: TouchPoint) -> Option<f32> {
        let x = point.x as i32;
        match self.drag {
            DragState::Idle => None,
            DragState::Pending { start_x } => {
                let travel = (x - start_x) as f32;
                if travel.abs() <= self.touch_slop_px {
                    return None;
                }
                // Movement inside the slop is swallowed
                let slop = if travel > 0.0 {
                    self.touch_slop_px
                } else {
                    -self.touch_slop_px
                };
                self.drag = DragState::Dragging { last_x: x };
                Some(travel - slop)
            }
            DragState::Dragging { last_x } => {
                self.drag = DragState::Dragging { last_x: x };
                Some((x - last_x) as f32)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Interactive wrapper
// ---------------------------------------------------------------------------

/// A [`Marquee`] that pauses while pressed and can be dragged by hand
pub struct InteractiveMarquee<C> {
    marquee: Marquee<C>,
    gestures: GestureTracker,
}

impl<C> InteractiveMarquee<C>
where
    C: Transform + Dimensions + EgDrawable<Color = Rgb565>,
{
    pub fn new(marquee: Marquee<C>) -> Self {
        let slop = defaults::TOUCH_SLOP.to_px(marquee.context().density);
        Self {
            marquee,
            gestures: GestureTracker::new(slop),
        }
    }

    pub fn marquee(&self) -> &Marquee<C> {
        &self.marquee
    }

    /// Mutable access to the wrapped marquee (config, bounds, content, ...)
    pub fn marquee_mut(&mut self) -> &mut Marquee<C> {
        &mut self.marquee
    }

    pub fn into_inner(self) -> Marquee<C> {
        self.marquee
    }

    pub fn gestures(&self) -> &GestureTracker {
        &self.gestures
    }

    fn sync_paused(&mut self) {
        let paused = self.gestures.is_paused();
        if self.marquee.state().is_paused() != paused {
            self.marquee.set_paused(paused);
        }
    }
}

impl<C> Touchable for InteractiveMarquee<C>
where
    C: Transform + Dimensions + EgDrawable<Color = Rgb565>,
{
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.marquee.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let inside = match event {
            TouchEvent::Press(point) => self.contains_point(point),
            _ => false,
        };

        let slop = defaults::TOUCH_SLOP.to_px(self.marquee.context().density);
        self.gestures.set_touch_slop(slop);

        let drag_enabled = self.marquee.config().scroll_enabled;
        let outcome = self.gestures.on_event(event, inside, drag_enabled);

        if let Some(delta) = outcome.drag_delta {
            trace!("Marquee dragged by {}", delta);
            self.marquee.scroll_by(delta);
        }
        self.sync_paused();

        if outcome.consumed {
            TouchResult::Handled
        } else {
            TouchResult::NotHandled
        }
    }
}

impl<C> Drawable for InteractiveMarquee<C>
where
    C: Transform + Dimensions + EgDrawable<Color = Rgb565>,
{
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.marquee.draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.marquee.bounds()
    }

    fn is_dirty(&self) -> bool {
        self.marquee.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.marquee.mark_clean()
    }

    fn mark_dirty(&mut self) {
        self.marquee.mark_dirty()
    }

    fn dirty_region(&self) -> Option<DirtyRegion> {
        self.marquee.dirty_region()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marquee::config::MarqueeConfig;
    use crate::marquee::driver::AnimationToken;
    use crate::marquee::state::{MarqueeState, SharedMarqueeState};
    use crate::marquee::widget::MarqueePhase;
    use embassy_time::Instant;
    use embedded_graphics::primitives::{PrimitiveStyle, Styled};

    type Block = Styled<Rectangle, PrimitiveStyle<Rgb565>>;

    fn interactive(config: MarqueeConfig) -> InteractiveMarquee<Block> {
        let content = Rectangle::new(Point::zero(), Size::new(1000, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN));
        let bounds = Rectangle::new(Point::new(0, 100), Size::new(300, 20));
        InteractiveMarquee::new(Marquee::new(bounds, content).with_config(config))
    }

    fn at(x: u16) -> TouchPoint {
        TouchPoint::new(x, 110)
    }

    #[test]
    fn test_press_pauses_release_resumes() {
        let mut m = interactive(MarqueeConfig::default());

        assert_eq!(m.handle_touch(TouchEvent::Press(at(50))), TouchResult::Handled);
        assert!(m.marquee().state().is_paused());
        assert_eq!(m.marquee().phase(), MarqueePhase::IdlePaused);

        assert_eq!(m.handle_touch(TouchEvent::Release(at(50))), TouchResult::Handled);
        assert!(!m.marquee().state().is_paused());
        assert_eq!(m.marquee().phase(), MarqueePhase::Scrolling);
    }

    #[test]
    fn test_cancel_resumes() {
        let mut m = interactive(MarqueeConfig::default());
        m.handle_touch(TouchEvent::Press(at(50)));
        m.handle_touch(TouchEvent::Cancel);
        assert!(!m.marquee().state().is_paused());
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut m = interactive(MarqueeConfig::default());
        let outside = TouchPoint::new(50, 10);
        assert_eq!(m.handle_touch(TouchEvent::Press(outside)), TouchResult::NotHandled);
        assert!(!m.marquee().state().is_paused());
        assert_eq!(m.handle_touch(TouchEvent::Drag(at(90))), TouchResult::NotHandled);
        assert_eq!(m.marquee().state().offset(), 0.0);
    }

    #[test]
    fn test_drag_within_slop_does_not_scroll() {
        let mut m = interactive(MarqueeConfig::default());
        m.handle_touch(TouchEvent::Press(at(100)));
        assert_eq!(m.handle_touch(TouchEvent::Drag(at(105))), TouchResult::Handled);
        assert!(!m.gestures().is_dragging());
        assert_eq!(m.marquee().state().offset(), 0.0);
    }

    #[test]
    fn test_drag_moves_offset_and_wraps() {
        let mut m = interactive(MarqueeConfig::default());
        m.handle_touch(TouchEvent::Press(at(100)));

        // 30px travel, 8px slop swallowed
        m.handle_touch(TouchEvent::Drag(at(130)));
        assert!(m.gestures().is_dragging());
        assert_eq!(m.marquee().state().offset(), 22.0);

        m.handle_touch(TouchEvent::Drag(at(70)));
        assert_eq!(m.marquee().state().offset(), 962.0);

        m.handle_touch(TouchEvent::Release(at(70)));
        assert!(!m.gestures().is_dragging());
        assert!(!m.marquee().state().is_paused());
    }

    #[test]
    fn test_drag_outside_bounds_keeps_tracking() {
        let mut m = interactive(MarqueeConfig::default());
        m.handle_touch(TouchEvent::Press(at(100)));
        m.handle_touch(TouchEvent::Drag(TouchPoint::new(150, 5)));
        assert_eq!(m.marquee().state().offset(), 42.0);
    }

    #[test]
    fn test_drag_disabled_when_scroll_disabled() {
        let mut m = interactive(MarqueeConfig::default().with_scroll_enabled(false));
        m.handle_touch(TouchEvent::Press(at(100)));
        assert!(m.marquee().state().is_paused());

        m.handle_touch(TouchEvent::Drag(at(200)));
        assert_eq!(m.marquee().state().offset(), 0.0);
    }

    #[test]
    fn test_no_animation_while_pressed() {
        let mut m = interactive(MarqueeConfig::default());
        m.marquee_mut().update(Instant::from_secs(0));
        m.handle_touch(TouchEvent::Press(at(100)));
        m.marquee_mut().update(Instant::from_secs(2));
        assert_eq!(m.marquee().state().offset(), 0.0);

        m.handle_touch(TouchEvent::Release(at(100)));
        m.marquee_mut().update(Instant::from_secs(3));
        assert_eq!(m.marquee().state().offset(), 900.0);
    }

    #[test]
    fn test_drag_reaches_shared_state() {
        let shared = SharedMarqueeState::new(MarqueeState::new(0.0));
        let token = AnimationToken::new();
        let mut m = interactive(MarqueeConfig::default());
        m.marquee_mut().sync_shared(&shared, &token);

        m.handle_touch(TouchEvent::Press(at(100)));
        m.handle_touch(TouchEvent::Drag(at(150)));
        assert_eq!(m.marquee().state().offset(), 42.0);

        m.marquee_mut().sync_shared(&shared, &token);
        assert_eq!(m.marquee().state().offset(), 42.0);
        assert_eq!(shared.get().offset(), 42.0);
        assert!(shared.get().is_paused());
    }

    #[test]
    fn test_tracker_pause_is_pressed_or_dragging() {
        let mut tracker = GestureTracker::new(8.0);
        assert!(!tracker.is_paused());

        tracker.on_event(TouchEvent::Press(at(0)), true, true);
        assert!(tracker.is_paused());

        let outcome = tracker.on_event(TouchEvent::Drag(at(20)), true, true);
        assert_eq!(outcome.drag_delta, Some(12.0));
        assert!(tracker.is_dragging() && tracker.is_paused());

        tracker.on_event(TouchEvent::Release(at(20)), true, true);
        assert!(!tracker.is_paused());
    }
}
