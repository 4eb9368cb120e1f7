// src/marquee/mod.rs
//! Seamlessly looping horizontal marquee
//!
//! - [`state`]: offset / content width / pause holder with save-restore
//! - [`driver`]: frame-driven offset animation, sync and async
//! - [`tiling`]: three-copy seamless layout
//! - [`widget`]: the [`Marquee`] widget itself
//! - [`interactive`]: press-to-pause and drag-to-scroll wrapper

pub mod config;
pub mod defaults;
pub mod driver;
pub mod interactive;
pub mod state;
pub mod tiling;
pub mod widget;

pub use config::{Density, Dp, HostContext, LayoutDirection, MarqueeConfig};
pub use driver::{
    AnimationKey, AnimationToken, FrameClock, FrameDriver, ScrollDirection, TickerClock, animate,
    drive,
};
pub use interactive::{GestureTracker, InteractiveMarquee};
pub use state::{MarqueeState, SavedMarqueeState, SharedMarqueeState};
pub use tiling::{COPY_COUNT, Tiling, is_scroll_needed};
pub use widget::{Marquee, MarqueePhase};
