// src/marquee/defaults.rs
//! Default configuration values for marquee behavior

use embassy_time::Duration;

use super::config::{Density, Dp};

/// Default enabled state for scrolling.
pub const SCROLL_ENABLED: bool = true;

/// Default scroll speed in dp per second.
pub const SPEED: Dp = Dp(100.0);

/// Default display density (1 dp = 1 px).
pub const DENSITY: Density = Density(1.0);

/// Default display frame period for [`TickerClock`](super::driver::TickerClock) (~60 FPS).
pub const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Horizontal travel before a press turns into a drag.
pub const TOUCH_SLOP: Dp = Dp(8.0);
