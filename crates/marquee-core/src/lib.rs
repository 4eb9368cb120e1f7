//! Hardware-independent core library for marquee-rs
//!
//! This crate contains the platform-agnostic pieces of a horizontally
//! scrolling marquee widget for `embedded-graphics` displays: the state
//! holder, the frame-driven animation driver, the three-copy tiling layout,
//! the widget itself and an interactive wrapper that pauses on touch.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod error;
pub mod marquee;
pub mod ui;

pub use error::{MarqueeError, MarqueeResult};
pub use marquee::{
    AnimationKey, AnimationToken, Density, Dp, FrameClock, FrameDriver, HostContext,
    InteractiveMarquee, LayoutDirection, Marquee, MarqueeConfig, MarqueePhase, MarqueeState,
    SavedMarqueeState, ScrollDirection, SharedMarqueeState, TickerClock, Tiling, animate, drive,
};
