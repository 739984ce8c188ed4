//! Startup animation sequence.
//!
//! Played once when the dashboard first appears. Stages run back to back,
//! and the last stage runs the needle sweep and the lamp self-test in
//! parallel:
//!
//! ```text
//!  0 ms ┬ indicators slide in from the right edge   (500 ms)
//! 500   ┼ header drops from above                    (300 ms)
//! 800   ┼ gauges rise from below the window          (500 ms)
//! 1300  ┼ status lights appear
//!       ├ needle 0 -> 300, pause, 300 -> 0           (1000 + 50 + 1000 ms)
//!       └ lamp self-test, 10 loops of 200 ms         (2000 ms)
//! 3350  ┴ finished, needle parked at 0
//! ```
//!
//! The sequence is a pure function of elapsed time. [`StartupSequence::frame`]
//! reports every stage's progress so widgets can place themselves without
//! keeping their own animation state.

use core::time::Duration;

use crate::config::{
    GAUGE_RISE,
    HEADER_DROP,
    INDICATOR_SLIDE,
    NEEDLE_SWEEP_DEG,
    SELF_TEST_LOOP,
    SELF_TEST_LOOPS,
    SWEEP_LEG,
    SWEEP_PAUSE,
};
use crate::math::fraction;

// =============================================================================
// Stage Boundaries
// =============================================================================

const HEADER_START: Duration = INDICATOR_SLIDE;
const RISE_START: Duration = HEADER_START.saturating_add(HEADER_DROP);
const PARALLEL_START: Duration = RISE_START.saturating_add(GAUGE_RISE);
const SWEEP_DOWN_START: Duration = SWEEP_LEG.saturating_add(SWEEP_PAUSE);
const SWEEP_LENGTH: Duration = SWEEP_DOWN_START.saturating_add(SWEEP_LEG);
const SELF_TEST_LENGTH: Duration = Duration::from_millis(SELF_TEST_LOOP.as_millis() as u64 * SELF_TEST_LOOPS as u64);

/// Total length of the sequence.
pub const STARTUP_LENGTH: Duration = PARALLEL_START.saturating_add(longer(SWEEP_LENGTH, SELF_TEST_LENGTH));

const fn longer(a: Duration, b: Duration) -> Duration { if a.as_nanos() >= b.as_nanos() { a } else { b } }

// =============================================================================
// Self-Test
// =============================================================================

/// Lamp forced on during one self-test loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TestLamp {
    LeftIndicator,
    HeaderAlert,
    RightIndicator,
    Horn,
    Charging,
    Brake,
    Accelerator,
}

impl TestLamp {
    /// Lamp lit during self-test loop `step`.
    ///
    /// Loop 1 only reveals the clock; loops 0 and 9 light nothing.
    pub const fn for_step(step: u32) -> Option<Self> {
        match step {
            2 => Some(Self::LeftIndicator),
            3 => Some(Self::HeaderAlert),
            4 => Some(Self::RightIndicator),
            5 => Some(Self::Horn),
            6 => Some(Self::Charging),
            7 => Some(Self::Brake),
            8 => Some(Self::Accelerator),
            _ => None,
        }
    }
}

/// First self-test loop that reveals the header clock.
pub const CLOCK_STEP: u32 = 1;

/// Self-test loop after which the charging lamp returns to its remembered state.
pub const CHARGING_RESTORE_STEP: u32 = 7;

// =============================================================================
// Frame
// =============================================================================

/// Progress of every startup stage at one instant.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StartupFrame {
    /// Indicator slide, `0.0` at the right edge to `1.0` at rest.
    pub indicator_slide: f32,
    /// Header drop, `0.0` hidden above the window to `1.0` at rest.
    pub header_drop: f32,
    /// Gauge rise, `0.0` below the window to `1.0` at rest.
    pub gauge_rise: f32,
    /// Horn and status words are drawn.
    pub status_visible: bool,
    /// Needle angle forced by the sweep, while it runs.
    pub sweep: Option<f32>,
    /// Current self-test loop, while the self-test runs.
    pub self_test: Option<u32>,
    /// Header clock is drawn.
    pub clock_visible: bool,
}

impl StartupFrame {
    /// Frame with every stage complete.
    pub const REVEALED: Self = Self {
        indicator_slide: 1.0,
        header_drop: 1.0,
        gauge_rise: 1.0,
        status_visible: true,
        sweep: None,
        self_test: None,
        clock_visible: true,
    };

    /// Lamp forced on by the self-test, if any.
    #[inline]
    pub fn test_lamp(&self) -> Option<TestLamp> { self.self_test.and_then(TestLamp::for_step) }
}

// =============================================================================
// Sequence
// =============================================================================

/// Elapsed-time driven startup sequence.
#[derive(Clone, Debug, Default)]
pub struct StartupSequence {
    elapsed: Duration,
}

impl StartupSequence {
    pub const fn new() -> Self { Self { elapsed: Duration::ZERO } }

    pub fn advance(&mut self, dt: Duration) { self.elapsed = self.elapsed.saturating_add(dt).min(STARTUP_LENGTH); }

    #[inline]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    #[inline]
    pub fn is_finished(&self) -> bool { self.elapsed >= STARTUP_LENGTH }

    /// Stage progress at the current elapsed time.
    pub fn frame(&self) -> StartupFrame {
        let t = self.elapsed;
        let parallel = t.saturating_sub(PARALLEL_START);
        let in_parallel = t >= PARALLEL_START;

        let sweep = (in_parallel && parallel < SWEEP_LENGTH).then(|| sweep_needle(parallel));

        let self_test = (in_parallel && parallel < SELF_TEST_LENGTH)
            .then(|| (parallel.as_millis() / SELF_TEST_LOOP.as_millis()) as u32);

        let clock_visible = in_parallel && parallel >= SELF_TEST_LOOP * CLOCK_STEP;

        StartupFrame {
            indicator_slide: fraction(t, INDICATOR_SLIDE),
            header_drop: fraction(t.saturating_sub(HEADER_START), HEADER_DROP),
            gauge_rise: fraction(t.saturating_sub(RISE_START), GAUGE_RISE),
            status_visible: in_parallel,
            sweep,
            self_test,
            clock_visible,
        }
    }
}

/// Needle angle `t` into the sweep.
fn sweep_needle(t: Duration) -> f32 {
    if t < SWEEP_LEG {
        NEEDLE_SWEEP_DEG * fraction(t, SWEEP_LEG)
    } else if t < SWEEP_DOWN_START {
        NEEDLE_SWEEP_DEG
    } else {
        NEEDLE_SWEEP_DEG * (1.0 - fraction(t - SWEEP_DOWN_START, SWEEP_LEG))
    }
}
