// src/marquee/state.rs
//! Marquee state holder
//!
//! [`MarqueeState`] owns the scroll offset, the measured content width and
//! the pause flag. Three writers touch it, one field each: the animation
//! driver (offset), the measurement pass (content width) and the interaction
//! layer (pause flag).
//!
//! Only the offset survives a save/restore cycle. Restoring builds a fresh
//! holder seeded with that offset; the content width is re-measured on the
//! next layout pass and the pause flag starts cleared.

use alloc::vec::Vec;
use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use serde::{Deserialize, Serialize};

use crate::error::MarqueeResult;

/// Scroll offset, content width and pause flag of one marquee
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarqueeState {
    offset: f32,
    content_width: u32,
    is_paused: bool,
}

impl MarqueeState {
    /// Create a state holder starting at `initial_offset`.
    ///
    /// The offset is stored as given until a content width is known.
    pub fn new(initial_offset: f32) -> Self {
        Self {
            offset: initial_offset,
            content_width: 0,
            is_paused: false,
        }
    }

    /// Rebuild a state holder from a value produced by [`save`](Self::save).
    pub fn restore(saved_offset: f32) -> Self {
        Self::new(saved_offset)
    }

    /// The value persisted across restarts (the offset).
    pub fn save(&self) -> f32 {
        self.offset
    }

    /// The current scroll offset, in `[0, content_width)` once the width is known
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Set the offset, wrapping it into `[0, content_width)` when the width is
    /// positive. With a zero width the value is stored unmodified.
    pub fn set_offset(&mut self, value: f32) {
        self.offset = wrap_offset(value, self.content_width);
    }

    /// Add `delta` to the offset and re-wrap.
    pub fn advance_by(&mut self, delta: f32) {
        self.set_offset(self.offset + delta);
    }

    /// The measured content width in pixels
    pub fn content_width(&self) -> u32 {
        self.content_width
    }

    /// Record a new measured content width.
    ///
    /// The stored offset is not rewrapped; the next offset write wraps
    /// against the new width. Returns `true` if the width changed.
    pub fn set_content_width(&mut self, width: u32) -> bool {
        if self.content_width == width {
            return false;
        }
        self.content_width = width;
        true
    }

    /// Whether scrolling is paused
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    /// Snapshot of the persisted fields
    pub fn snapshot(&self) -> SavedMarqueeState {
        SavedMarqueeState {
            offset: self.save(),
        }
    }
}

impl From<SavedMarqueeState> for MarqueeState {
    fn from(saved: SavedMarqueeState) -> Self {
        MarqueeState::restore(saved.offset)
    }
}

/// Reduce `value` into `[0, width)`. A zero width leaves `value` untouched.
pub(crate) fn wrap_offset(value: f32, width: u32) -> f32 {
    if width == 0 {
        return value;
    }

    let width = width as f32;
    ((value % width) + width) % width
}

// ---------------------------------------------------------------------------
// Persisted snapshot
// ---------------------------------------------------------------------------

/// Persisted form of a [`MarqueeState`]
///
/// Encoded with postcard so hosts can stash it in flash or on an SD card
/// alongside other settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedMarqueeState {
    pub offset: f32,
}

impl SavedMarqueeState {
    /// Serialize to a postcard byte buffer
    pub fn to_bytes(&self) -> MarqueeResult<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }

    /// Deserialize from a postcard byte buffer
    pub fn from_bytes(bytes: &[u8]) -> MarqueeResult<Self> {
        Ok(postcard::from_bytes(bytes)?)
    }
}

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// A [`MarqueeState`] shared between an async animation task and the render
/// loop on the same executor.
///
/// ```ignore
/// static STATE: SharedMarqueeState = SharedMarqueeState::new(MarqueeState::new(0.0));
/// STATE.with(|state| state.set_paused(true));
/// ```
pub struct SharedMarqueeState {
    inner: Mutex<CriticalSectionRawMutex, RefCell<MarqueeState>>,
}

impl SharedMarqueeState {
    pub const fn new(state: MarqueeState) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(state)),
        }
    }

    /// Run `f` with exclusive access to the state
    pub fn with<R>(&self, f: impl FnOnce(&mut MarqueeState) -> R) -> R {
        self.inner.lock(|cell| f(&mut *cell.borrow_mut()))
    }

    /// Copy out the current state
    pub fn get(&self) -> MarqueeState {
        self.inner.lock(|cell| cell.borrow().clone())
    }
}
