// src/marquee/driver.rs
//! Frame-driven animation of the marquee offset
//!
//! Every display frame the offset advances by
//! `direction × speed_px_per_sec × elapsed_seconds`, unless the state is
//! paused. Two ways of driving it are provided:
//!
//! - [`FrameDriver`]: a synchronous integrator for render loops that already
//!   tick once per frame (the simulator, a page `update()`).
//! - [`animate`] / [`drive`]: an async loop that awaits the next frame from a
//!   [`FrameClock`] and is cancelled by dropping it. [`drive`] restarts it
//!   whenever the [`AnimationKey`] published on an [`AnimationToken`] changes.
//!
//! In both cases a key change restarts timing from scratch, so no elapsed
//! time carries over from before the change.

use core::future::Future;

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};
use log::{debug, trace};

use super::config::LayoutDirection;
use super::defaults;
use super::state::{MarqueeState, SharedMarqueeState};

// ---------------------------------------------------------------------------
// Keyed dependencies
// ---------------------------------------------------------------------------

/// Direction the content travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves left (offset decreases)
    Left,
    /// Content moves right (offset increases)
    Right,
}

impl ScrollDirection {
    pub fn sign(self) -> f32 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }
}

impl From<LayoutDirection> for ScrollDirection {
    fn from(layout: LayoutDirection) -> Self {
        match layout {
            LayoutDirection::Ltr => ScrollDirection::Left,
            LayoutDirection::Rtl => ScrollDirection::Right,
        }
    }
}

/// Inputs the animation loop is keyed on. Any change restarts the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationKey {
    pub scroll_enabled: bool,
    pub scroll_needed: bool,
    pub direction: ScrollDirection,
    pub speed_px_per_sec: f32,
}

impl AnimationKey {
    /// A key for which the loop never subscribes to frames
    pub const IDLE: AnimationKey = AnimationKey {
        scroll_enabled: false,
        scroll_needed: false,
        direction: ScrollDirection::Left,
        speed_px_per_sec: 0.0,
    };

    /// Whether a loop with this key animates at all
    pub fn should_run(&self) -> bool {
        self.scroll_enabled && self.scroll_needed
    }

    /// Signed offset change for `elapsed` at this key's speed and direction
    pub fn displacement(&self, elapsed: Duration) -> f32 {
        let seconds = elapsed.as_micros() as f32 / 1_000_000.0;
        self.direction.sign() * self.speed_px_per_sec * seconds
    }
}

// ---------------------------------------------------------------------------
// Synchronous driver
// ---------------------------------------------------------------------------

/// Per-frame offset integrator for render loops
#[derive(Debug, Clone)]
pub struct FrameDriver {
    key: AnimationKey,
    last_frame: Option<Instant>,
}

impl FrameDriver {
    pub fn new(key: AnimationKey) -> Self {
        Self {
            key,
            last_frame: None,
        }
    }

    pub fn key(&self) -> AnimationKey {
        self.key
    }

    /// Install a new key. Restarts frame timing if it differs from the
    /// current one and returns whether it did.
    pub fn rekey(&mut self, key: AnimationKey) -> bool {
        if self.key == key {
            return false;
        }
        debug!("Marquee animation rekeyed: {:?}", key);
        self.key = key;
        self.restart();
        true
    }

    /// Forget the previous frame timestamp
    pub fn restart(&mut self) {
        self.last_frame = None;
    }

    /// Whether this driver currently consumes frames
    pub fn is_running(&self) -> bool {
        self.key.should_run()
    }

    /// Integrate one display frame at `now`.
    ///
    /// The first frame after a (re)start only records its timestamp. Returns
    /// `true` if the offset was advanced.
    pub fn on_frame(&mut self, now: Instant, state: &mut MarqueeState) -> bool {
        if !self.key.should_run() {
            return false;
        }

        let Some(last) = self.last_frame.replace(now) else {
            return false;
        };

        if state.is_paused() {
            return false;
        }

        let elapsed = now.saturating_duration_since(last);
        let delta = self.key.displacement(elapsed);
        if delta == 0.0 {
            return false;
        }

        state.advance_by(delta);
        trace!("Marquee offset {:.2} (+{:.3})", state.offset(), delta);
        true
    }
}

// ---------------------------------------------------------------------------
// Async driver
// ---------------------------------------------------------------------------

/// Source of display-frame timestamps
pub trait FrameClock {
    /// Suspend until the next display frame and return its timestamp
    fn next_frame(&mut self) -> impl Future<Output = Instant>;
}

/// [`FrameClock`] backed by an `embassy_time::Ticker`
pub struct TickerClock {
    ticker: Ticker,
}

impl TickerClock {
    pub fn new(frame_period: Duration) -> Self {
        Self {
            ticker: Ticker::every(frame_period),
        }
    }
}

impl Default for TickerClock {
    fn default() -> Self {
        Self::new(defaults::FRAME_PERIOD)
    }
}

impl FrameClock for TickerClock {
    async fn next_frame(&mut self) -> Instant {
        self.ticker.next().await;
        Instant::now()
    }
}

/// Animate `state` with `key` until the returned future is dropped.
///
/// Returns immediately, without awaiting a single frame, when the key says
/// scrolling is disabled or not needed.
pub async fn animate<C: FrameClock>(
    state: &SharedMarqueeState,
    key: AnimationKey,
    clock: &mut C,
) {
    if !key.should_run() {
        debug!("Marquee idle: {:?}", key);
        return;
    }

    let mut driver = FrameDriver::new(key);
    loop {
        let now = clock.next_frame().await;
        state.with(|state| driver.on_frame(now, state));
    }
}

/// Latest [`AnimationKey`] published by the layout side
///
/// The render loop publishes a key whenever it re-measures; [`drive`]
/// restarts the animation only when the key actually changed.
pub struct AnimationToken {
    key: Signal<CriticalSectionRawMutex, AnimationKey>,
}

impl Default for AnimationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationToken {
    pub const fn new() -> Self {
        Self { key: Signal::new() }
    }

    /// Publish the current key
    pub fn publish(&self, key: AnimationKey) {
        self.key.signal(key);
    }

    /// Wait for a key different from `current`
    pub async fn next_key(&self, current: Option<AnimationKey>) -> AnimationKey {
        loop {
            let key = self.key.wait().await;
            if Some(key) != current {
                return key;
            }
        }
    }
}

/// Run the marquee animation forever, restarting it on every key change.
///
/// The in-flight [`animate`] future is dropped as soon as a different key is
/// published, so a stale loop never writes to the state again.
pub async fn drive<C: FrameClock>(
    state: &SharedMarqueeState,
    token: &AnimationToken,
    clock: &mut C,
) {
    let mut key = token.next_key(None).await;
    loop {
        match select(animate(state, key, clock), token.next_key(Some(key))).await {
            Either::First(()) => key = token.next_key(Some(key)).await,
            Either::Second(new_key) => key = new_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec::Vec;

    fn key(direction: ScrollDirection) -> AnimationKey {
        AnimationKey {
            scroll_enabled: true,
            scroll_needed: true,
            direction,
            speed_px_per_sec: 100.0,
        }
    }

    fn measured_state(width: u32) -> MarqueeState {
        let mut state = MarqueeState::new(0.0);
        state.set_content_width(width);
        state
    }

    #[test]
    fn test_direction_follows_layout() {
        assert_eq!(ScrollDirection::from(LayoutDirection::Ltr).sign(), -1.0);
        assert_eq!(ScrollDirection::from(LayoutDirection::Rtl).sign(), 1.0);
    }

    #[test]
    fn test_first_frame_only_records_time() {
        let mut driver = FrameDriver::new(key(ScrollDirection::Left));
        let mut state = measured_state(1000);

        assert!(!driver.on_frame(Instant::from_secs(10), &mut state));
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_ltr_five_seconds() {
        let mut driver = FrameDriver::new(key(ScrollDirection::Left));
        let mut state = measured_state(1000);

        driver.on_frame(Instant::from_secs(0), &mut state);
        assert!(driver.on_frame(Instant::from_secs(5), &mut state));

        // Displacement −500 wraps to 500
        assert_eq!(state.offset(), 500.0);
    }

    #[test]
    fn test_rtl_five_seconds() {
        let mut driver = FrameDriver::new(key(ScrollDirection::Right));
        let mut state = measured_state(1000);

        driver.on_frame(Instant::from_secs(0), &mut state);
        driver.on_frame(Instant::from_secs(5), &mut state);
        assert_eq!(state.offset(), 500.0);
    }

    #[test]
    fn test_rtl_displacement_is_positive() {
        let mut driver = FrameDriver::new(key(ScrollDirection::Right));
        let mut state = measured_state(1000);

        driver.on_frame(Instant::from_millis(0), &mut state);
        driver.on_frame(Instant::from_millis(1500), &mut state);
        assert_eq!(state.offset(), 150.0);

        let mut driver = FrameDriver::new(key(ScrollDirection::Left));
        let mut state = measured_state(1000);
        driver.on_frame(Instant::from_millis(0), &mut state);
        driver.on_frame(Instant::from_millis(1500), &mut state);
        assert_eq!(state.offset(), 850.0);
    }

    #[test]
    fn test_many_small_frames_accumulate() {
        let mut driver = FrameDriver::new(key(ScrollDirection::Left));
        let mut state = measured_state(1000);

        for frame in 0..=300u64 {
            driver.on_frame(Instant::from_millis(frame * 16), &mut state);
        }

        // 300 frames × 16 ms = 4.8 s → −480 px → 520
        assert!((state.offset() - 520.0).abs() < 0.05, "{}", state.offset());
    }

    #[test]
    fn test_disabled_or_not_needed_never_moves() {
        let mut disabled = key(ScrollDirection::Left);
        disabled.scroll_enabled = false;
        let mut fits = key(ScrollDirection::Left);
        fits.scroll_needed = false;

        for k in [disabled, fits, AnimationKey::IDLE] {
            let mut driver = FrameDriver::new(k);
            let mut state = measured_state(200);
            for secs in 0..100 {
                assert!(!driver.on_frame(Instant::from_secs(secs), &mut state));
            }
            assert_eq!(state.offset(), 0.0);
        }
    }

    #[test]
    fn test_paused_holds_then_resumes() {
        let mut driver = FrameDriver::new(key(ScrollDirection::Right));
        let mut state = measured_state(1000);

        driver.on_frame(Instant::from_secs(0), &mut state);
        state.set_paused(true);
        driver.on_frame(Instant::from_secs(1), &mut state);
        driver.on_frame(Instant::from_secs(2), &mut state);
        assert_eq!(state.offset(), 0.0);

        state.set_paused(false);
        driver.on_frame(Instant::from_secs(3), &mut state);
        // Only the frame after resuming counts
        assert_eq!(state.offset(), 100.0);
    }

    #[test]
    fn test_rekey_drops_elapsed_time() {
        let mut driver = FrameDriver::new(key(ScrollDirection::Right));
        let mut state = measured_state(1000);

        driver.on_frame(Instant::from_secs(0), &mut state);
        assert!(!driver.rekey(key(ScrollDirection::Right)));

        let mut faster = key(ScrollDirection::Right);
        faster.speed_px_per_sec = 200.0;
        assert!(driver.rekey(faster));

        // First frame after the restart only records time
        driver.on_frame(Instant::from_secs(10), &mut state);
        assert_eq!(state.offset(), 0.0);
        driver.on_frame(Instant::from_secs(11), &mut state);
        assert_eq!(state.offset(), 200.0);
    }

    #[test]
    fn test_backwards_clock_is_ignored() {
        let mut driver = FrameDriver::new(key(ScrollDirection::Right));
        let mut state = measured_state(1000);

        driver.on_frame(Instant::from_secs(5), &mut state);
        assert!(!driver.on_frame(Instant::from_secs(4), &mut state));
        assert_eq!(state.offset(), 0.0);
    }

    // -----------------------------------------------------------------------
    // Async loop
    // -----------------------------------------------------------------------

    /// Yields pre-recorded frame times, then signals `done` and stalls
    struct ScriptedClock<'a> {
        frames: alloc::vec::IntoIter<Instant>,
        done: &'a Signal<CriticalSectionRawMutex, ()>,
        polled: usize,
    }

    impl<'a> ScriptedClock<'a> {
        fn new(frames: Vec<Instant>, done: &'a Signal<CriticalSectionRawMutex, ()>) -> Self {
            Self {
                frames: frames.into_iter(),
                done,
                polled: 0,
            }
        }
    }

    impl FrameClock for ScriptedClock<'_> {
        async fn next_frame(&mut self) -> Instant {
            self.polled += 1;
            match self.frames.next() {
                Some(frame) => frame,
                None => {
                    self.done.signal(());
                    core::future::pending().await
                }
            }
        }
    }

    fn shared(width: u32) -> SharedMarqueeState {
        SharedMarqueeState::new(measured_state(width))
    }

    #[test]
    fn test_animate_integrates_frames() {
        let state = shared(1000);
        let done = Signal::new();
        let frames = (0..=5).map(Instant::from_secs).collect();
        let mut clock = ScriptedClock::new(frames, &done);

        embassy_futures::block_on(select(
            animate(&state, key(ScrollDirection::Left), &mut clock),
            done.wait(),
        ));

        assert_eq!(state.get().offset(), 500.0);
    }

    #[test]
    fn test_animate_idle_key_never_awaits_frames() {
        let state = shared(200);
        let done = Signal::new();
        let mut clock = ScriptedClock::new(Vec::new(), &done);

        embassy_futures::block_on(animate(&state, AnimationKey::IDLE, &mut clock));

        assert_eq!(clock.polled, 0);
        assert_eq!(state.get().offset(), 0.0);
    }

    #[test]
    fn test_animate_respects_pause() {
        let state = shared(1000);
        state.with(|s| s.set_paused(true));
        let done = Signal::new();
        let frames = (0..=5).map(Instant::from_secs).collect();
        let mut clock = ScriptedClock::new(frames, &done);

        embassy_futures::block_on(select(
            animate(&state, key(ScrollDirection::Left), &mut clock),
            done.wait(),
        ));

        assert_eq!(state.get().offset(), 0.0);
    }

    #[test]
    fn test_token_skips_unchanged_key() {
        let token = AnimationToken::new();
        let a = key(ScrollDirection::Left);
        let b = key(ScrollDirection::Right);

        token.publish(a);
        assert_eq!(embassy_futures::block_on(token.next_key(None)), a);

        token.publish(b);
        assert_eq!(embassy_futures::block_on(token.next_key(Some(a))), b);
    }

    #[test]
    fn test_drive_runs_published_key() {
        let state = shared(1000);
        let token = AnimationToken::new();
        token.publish(key(ScrollDirection::Right));

        let done = Signal::new();
        let frames = (0..=3).map(Instant::from_secs).collect();
        let mut clock = ScriptedClock::new(frames, &done);

        embassy_futures::block_on(select(drive(&state, &token, &mut clock), done.wait()));

        assert_eq!(state.get().offset(), 300.0);
    }
}
