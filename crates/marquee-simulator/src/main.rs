//! Desktop simulator for the marquee-rs widget.
//!
//! Renders marquees in an SDL2 window via `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key   | Action                                   |
//! |-------|------------------------------------------|
//! | Space | Pause / resume scrolling                 |
//! | I     | Toggle touch interaction (press / drag)  |
//! | R     | Toggle layout direction (LTR / RTL)      |
//! | + / - | Speed up / slow down                     |
//! | S     | Save marquee state snapshot              |
//! | L     | Restore the saved snapshot               |
//! | Q     | Quit                                     |
//!
//! Mouse button down / move / up are forwarded as touch events.

use std::time::Duration;

use embassy_time::Instant;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use marquee_core::marquee::{
    Dp, HostContext, InteractiveMarquee, Marquee, MarqueeConfig, MarqueeState, SavedMarqueeState,
};
use marquee_core::ui::styling::{COLOR_BACKGROUND, COLOR_FOREGROUND, COLOR_STROKE, LIGHT_GRAY};
use marquee_core::ui::{
    Action, Button, ButtonVariant, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, Drawable, Style,
    TouchEvent, TouchPoint, TouchResult, Touchable,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~60 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Speed used by the demo, matching a fast headline ticker.
const DEMO_SPEED: Dp = Dp(200.0);

/// Step applied by the +/- keys.
const SPEED_STEP: f32 = 25.0;

const HEADLINE: &str =
    "This space for rent... Marquee scrolls whenever its content outgrows the viewport.";
const CAPTION: &str = "Short text stays put";

const TOGGLE_PAUSE: Action = Action::ToggleSetting(0);

type Label = Text<'static, MonoTextStyle<'static, Rgb565>>;

// ---------------------------------------------------------------------------
// Demo scene
// ---------------------------------------------------------------------------

struct Scene {
    headline: InteractiveMarquee<Label>,
    caption: Marquee<Label>,
    pause_button: Button,
    interactive: bool,
    paused: bool,
    saved: Option<Vec<u8>>,
    needs_redraw: bool,
}

impl Scene {
    fn new() -> Self {
        let headline_text = Text::new(
            HEADLINE,
            Point::zero(),
            MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE),
        );
        let headline = Marquee::new(
            Rectangle::new(Point::new(0, 90), Size::new(DISPLAY_WIDTH_PX as u32, 40)),
            headline_text,
        )
        .with_config(MarqueeConfig::default().with_speed(DEMO_SPEED))
        .with_style(Style::new().with_background(COLOR_FOREGROUND));

        let caption_text = Text::new(
            CAPTION,
            Point::zero(),
            MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY),
        );
        let caption = Marquee::new(
            Rectangle::new(Point::new(40, 160), Size::new(240, 24)),
            caption_text,
        )
        .with_style(Style::new().with_border(COLOR_STROKE, 1));

        let pause_button = Button::new(
            Rectangle::new(Point::new(8, 8), Size::new(90, 28)),
            "Pause",
            TOGGLE_PAUSE,
        )
        .with_variant(ButtonVariant::Primary);

        Self {
            headline: InteractiveMarquee::new(headline),
            caption,
            pause_button,
            interactive: true,
            paused: false,
            saved: None,
            needs_redraw: true,
        }
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        let config = self.headline.marquee().config().with_scroll_enabled(!self.paused);
        self.headline.marquee_mut().set_config(config);
        self.pause_button
            .set_label(if self.paused { "Resume" } else { "Pause" });
        info!("Scrolling {}", if self.paused { "paused" } else { "resumed" });
    }

    fn toggle_direction(&mut self) {
        let context = *self.headline.marquee().context();
        let context = HostContext::new(context.density, context.layout_direction.toggled());
        info!("Layout direction → {:?}", context.layout_direction);
        self.headline.marquee_mut().set_context(context);
        self.caption.set_context(context);
    }

    fn change_speed(&mut self, step: f32) {
        let config = *self.headline.marquee().config();
        let speed = Dp((config.speed.0 + step).max(0.0));
        info!("Speed → {} dp/s", speed.0);
        self.headline.marquee_mut().set_config(config.with_speed(speed));
    }

    fn save(&mut self) {
        match self.headline.marquee().save_state().to_bytes() {
            Ok(bytes) => {
                info!(
                    "Saved offset {:.1} ({} bytes)",
                    self.headline.marquee().state().offset(),
                    bytes.len()
                );
                self.saved = Some(bytes);
            }
            Err(e) => error!("Save failed: {}", e),
        }
    }

    fn restore(&mut self) {
        let Some(bytes) = self.saved.as_deref() else {
            warn!("Nothing saved yet (press S first)");
            return;
        };

        match SavedMarqueeState::from_bytes(bytes) {
            Ok(saved) => {
                info!("Restoring offset {:.1}", saved.offset);
                self.headline
                    .marquee_mut()
                    .replace_state(MarqueeState::from(saved));
            }
            Err(e) => error!("Restore failed: {}", e),
        }
    }

    fn handle_touch(&mut self, event: TouchEvent) {
        if let TouchResult::Action(action) = self.pause_button.handle_touch(event) {
            if action == TOGGLE_PAUSE {
                self.toggle_pause();
            }
            return;
        }

        if self.interactive {
            self.headline.handle_touch(event);
        }
    }

    fn update(&mut self, now: Instant) {
        self.headline.marquee_mut().update(now);
        self.caption.update(now);
    }

    fn is_dirty(&self) -> bool {
        self.needs_redraw
            || self.headline.is_dirty()
            || self.caption.is_dirty()
            || self.pause_button.is_dirty()
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        if self.needs_redraw {
            display.clear(COLOR_BACKGROUND)?;
            self.headline.mark_dirty();
            self.caption.mark_dirty();
            self.pause_button.mark_dirty();
            self.needs_redraw = false;
        }

        if self.headline.is_dirty() {
            self.headline.draw(display)?;
            self.headline.mark_clean();
        }
        if self.caption.is_dirty() {
            self.caption.draw(display)?;
            self.caption.mark_clean();
        }
        if self.pause_button.is_dirty() {
            self.pause_button.draw(display)?;
            self.pause_button.mark_clean();
        }

        Ok(())
    }
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting marquee simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: Space=Pause  I=Interactive  R=Direction  +/-=Speed  S=Save  L=Load  Q=Quit");

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        DISPLAY_WIDTH_PX as u32,
        DISPLAY_HEIGHT_PX as u32,
    ));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Marquee Simulator", &output_settings);

    let mut scene = Scene::new();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    if let Err(e) = scene.draw(&mut display) {
        error!("Draw error: {:?}", e);
    }
    window.update(&display);

    let mut mouse_down = false;

    'running: loop {
        let frame_start = std::time::Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::Space => scene.toggle_pause(),
                    Keycode::I => {
                        scene.interactive = !scene.interactive;
                        // Drop any gesture in flight so the marquee is not left paused
                        scene.headline.handle_touch(TouchEvent::Cancel);
                        info!("Interaction {}", if scene.interactive { "on" } else { "off" });
                    }
                    Keycode::R => scene.toggle_direction(),
                    Keycode::Plus | Keycode::Equals | Keycode::KpPlus => {
                        scene.change_speed(SPEED_STEP)
                    }
                    Keycode::Minus | Keycode::KpMinus => scene.change_speed(-SPEED_STEP),
                    Keycode::S => scene.save(),
                    Keycode::L => scene.restore(),
                    _ => {}
                },

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    scene.handle_touch(TouchEvent::Press(touch_point(point)));
                }

                SimulatorEvent::MouseMove { point } if mouse_down => {
                    scene.handle_touch(TouchEvent::Drag(touch_point(point)));
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    mouse_down = false;
                    scene.handle_touch(TouchEvent::Release(touch_point(point)));
                }

                _ => {}
            }
        }

        // --- Frame tick ---------------------------------------------------
        scene.update(Instant::now());

        // --- Render -------------------------------------------------------
        if scene.is_dirty() {
            if let Err(e) = scene.draw(&mut display) {
                error!("Draw error: {:?}", e);
            }
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    let snapshot = scene.headline.marquee().save_state();
    info!("Simulator exiting at offset {:.1}", snapshot.offset);
}
