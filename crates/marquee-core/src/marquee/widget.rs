// src/marquee/widget.rs
//! The marquee widget
//!
//! [`Marquee`] clips its content to a fixed viewport. If the content's
//! natural width exceeds the viewport, it is tiled three times and
//! translated by the animated offset; otherwise it is drawn once, centred.
//!
//! The widget is driven from the host's render loop:
//!
//! ```ignore
//! let text = Text::new("This space for rent...", Point::zero(), style);
//! let mut marquee = Marquee::new(Rectangle::new(Point::new(0, 100), Size::new(320, 40)), text)
//!     .with_config(MarqueeConfig::default().with_speed(Dp(200.0)));
//!
//! loop {
//!     marquee.update(Instant::now());
//!     if marquee.is_dirty() {
//!         marquee.draw(&mut display)?;
//!         marquee.mark_clean();
//!     }
//! }
//! ```

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_layout::align::{Align, horizontal, vertical};
use embassy_time::Instant;
use log::debug;

use super::config::{HostContext, MarqueeConfig};
use super::driver::{AnimationKey, AnimationToken, FrameDriver, ScrollDirection};
use super::state::{MarqueeState, SavedMarqueeState, SharedMarqueeState};
use super::tiling::{Tiling, is_scroll_needed};
use crate::ui::core::{DirtyRegion, Drawable};
use crate::ui::styling::Style;

/// Externally driven animation phase of a marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueePhase {
    /// Scrolling is disabled or the content fits
    IdleNoScroll,
    /// Scrolling would run but the state is paused
    IdlePaused,
    /// The offset advances every frame
    Scrolling,
}

/// Horizontally looping marquee around arbitrary embedded-graphics content
pub struct Marquee<C> {
    bounds: Rectangle,
    content: C,
    state: MarqueeState,
    config: MarqueeConfig,
    context: HostContext,
    style: Style,
    driver: FrameDriver,
    scroll_needed: bool,
    /// Manual scroll not yet pushed into a shared state
    pending_scroll: f32,
    dirty: bool,
}

impl<C> Marquee<C>
where
    C: Transform + Dimensions + EgDrawable<Color = Rgb565>,
{
    /// Create a marquee over `content`, clipped to `bounds`.
    ///
    /// Uses a fresh [`MarqueeState`], [`MarqueeConfig::default`] and
    /// [`HostContext::default`].
    pub fn new(bounds: Rectangle, content: C) -> Self {
        let mut marquee = Self {
            bounds,
            content,
            state: MarqueeState::default(),
            config: MarqueeConfig::default(),
            context: HostContext::default(),
            style: Style::default(),
            driver: FrameDriver::new(AnimationKey::IDLE),
            scroll_needed: false,
            pending_scroll: 0.0,
            dirty: true,
        };
        marquee.measure();
        marquee
    }

    /// Use an existing (e.g. restored) state holder
    pub fn with_state(mut self, state: MarqueeState) -> Self {
        self.replace_state(state);
        self
    }

    pub fn with_config(mut self, config: MarqueeConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn with_context(mut self, context: HostContext) -> Self {
        self.set_context(context);
        self
    }

    /// Background/border drawn behind the content
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self.dirty = true;
        self
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
            self.measure();
        }
    }

    pub fn set_config(&mut self, config: MarqueeConfig) {
        if self.config != config {
            self.config = config;
            self.dirty = true;
            self.rekey();
        }
    }

    pub fn set_context(&mut self, context: HostContext) {
        if self.context != context {
            self.context = context;
            self.dirty = true;
            self.rekey();
        }
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    pub fn context(&self) -> &HostContext {
        &self.context
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Replace the content and re-measure it
    pub fn set_content(&mut self, content: C) {
        self.content = content;
        self.dirty = true;
        self.measure();
    }

    /// Mutate the content in place, then re-measure it
    pub fn update_content<R>(&mut self, f: impl FnOnce(&mut C) -> R) -> R {
        let result = f(&mut self.content);
        self.dirty = true;
        self.measure();
        result
    }

    pub fn state(&self) -> &MarqueeState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MarqueeState {
        self.dirty = true;
        &mut self.state
    }

    /// Swap in a different state holder. Frame timing restarts, so no time
    /// elapsed before the swap is applied to the new offset.
    pub fn replace_state(&mut self, state: MarqueeState) {
        self.state = state;
        self.pending_scroll = 0.0;
        self.driver.restart();
        self.dirty = true;
        self.measure();
    }

    /// Persisted form of the current state
    pub fn save_state(&self) -> SavedMarqueeState {
        self.state.snapshot()
    }

    pub fn is_scroll_needed(&self) -> bool {
        self.scroll_needed
    }

    /// Measure the content and container, pushing any width change into the
    /// state holder. Returns `true` if the content width changed.
    pub fn measure(&mut self) -> bool {
        // Keep the content vertically centred in the viewport
        self.content
            .align_to_mut(&self.bounds, horizontal::NoAlignment, vertical::Center);

        let content_width = self.content.bounding_box().size.width;
        let changed = self.state.set_content_width(content_width);
        if changed {
            debug!(
                "Marquee content measured: {}px in {}px viewport",
                content_width, self.bounds.size.width
            );
            self.dirty = true;
        }

        let scroll_needed = is_scroll_needed(content_width, self.bounds.size.width);
        if scroll_needed != self.scroll_needed {
            self.scroll_needed = scroll_needed;
            self.dirty = true;
        }

        self.rekey();
        changed
    }

    /// The keyed dependencies of the animation loop
    pub fn animation_key(&self) -> AnimationKey {
        AnimationKey {
            scroll_enabled: self.config.scroll_enabled,
            scroll_needed: self.scroll_needed,
            direction: ScrollDirection::from(self.context.layout_direction),
            speed_px_per_sec: self.config.speed_px_per_sec(&self.context),
        }
    }

    fn rekey(&mut self) {
        let key = self.animation_key();
        self.driver.rekey(key);
    }

    /// Advance one display frame at `now`. Returns `true` if the offset moved.
    pub fn update(&mut self, now: Instant) -> bool {
        // The local state is authoritative here
        self.pending_scroll = 0.0;
        self.measure();
        let moved = self.driver.on_frame(now, &mut self.state);
        if moved {
            self.dirty = true;
        }
        moved
    }

    /// Bridge to an async [`drive`](super::driver::drive) task: publish the
    /// current key, push measurement, pause and any manual scroll into
    /// `shared`, and pull the animated offset back for drawing.
    pub fn sync_shared(&mut self, shared: &SharedMarqueeState, token: &AnimationToken) {
        self.measure();
        token.publish(self.animation_key());

        let pending = core::mem::take(&mut self.pending_scroll);
        let offset = shared.with(|state| {
            state.set_content_width(self.state.content_width());
            state.set_paused(self.state.is_paused());
            if pending != 0.0 {
                state.advance_by(pending);
            }
            state.offset()
        });

        if offset != self.state.offset() {
            self.state.set_offset(offset);
            self.dirty = true;
        }
    }

    /// Shift the offset by `delta` pixels (re-wrapped by the state holder)
    pub fn scroll_by(&mut self, delta: f32) {
        self.state.advance_by(delta);
        self.pending_scroll += delta;
        self.dirty = true;
    }

    /// Push a pause flag into the state holder
    pub fn set_paused(&mut self, paused: bool) {
        if self.state.is_paused() != paused {
            debug!("Marquee paused: {}", paused);
            self.state.set_paused(paused);
        }
    }

    pub fn phase(&self) -> MarqueePhase {
        if !self.animation_key().should_run() {
            MarqueePhase::IdleNoScroll
        } else if self.state.is_paused() {
            MarqueePhase::IdlePaused
        } else {
            MarqueePhase::Scrolling
        }
    }

    /// Current placement of the content copies
    pub fn tiling(&self) -> Tiling {
        Tiling::compute(
            self.state.offset(),
            self.state.content_width(),
            self.bounds.size.width,
            self.scroll_needed,
        )
    }
}

impl<C> Drawable for Marquee<C>
where
    C: Transform + Dimensions + EgDrawable<Color = Rgb565>,
{
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let mut clipped = display.clipped(&self.bounds);

        if self.style.has_fill_or_border() {
            self.bounds
                .into_styled(self.style.to_primitive_style())
                .draw(&mut clipped)?;
        }

        let content_left = self.content.bounding_box().top_left.x;
        for left in self.tiling().copy_origins(self.bounds.top_left.x) {
            let copy = self.content.translate(Point::new(left - content_left, 0));
            EgDrawable::draw(&copy, &mut clipped)?;
        }

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
