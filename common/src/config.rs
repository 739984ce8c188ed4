//! Cluster configuration constants.
//!
//! Timings mirror the cooperative timers of the cluster: a fast control tick
//! for held pedals and speed decay, a slow blink interval for the turn
//! indicators, and the stage lengths of the startup sequence.

use core::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Default framebuffer width in pixels (16:9).
pub const DEFAULT_WIDTH: u32 = 640;

/// Default framebuffer height in pixels.
pub const DEFAULT_HEIGHT: u32 = 360;

/// Smallest framebuffer the layout can place every widget in.
pub const MIN_WIDTH: u32 = 320;
pub const MIN_HEIGHT: u32 = 180;

// =============================================================================
// Dial Geometry
// =============================================================================

/// Total needle travel of the speedometer, in degrees.
pub const NEEDLE_SWEEP_DEG: f32 = 300.0;

/// Screen angle (clockwise from +x) of the speedometer's zero mark.
pub const SPEED_ZERO_DEG: f32 = 120.0;

/// Screen angle of the battery gauge's 0% mark.
pub const BATTERY_EMPTY_DEG: f32 = 417.0;

/// Battery needle travel per percent.
pub const BATTERY_DEG_PER_PERCENT: f32 = 1.8;

// =============================================================================
// Speed Range
// =============================================================================

pub const MIN_TOP_SPEED: u32 = 40;
pub const MAX_TOP_SPEED: u32 = 400;
pub const DEFAULT_TOP_SPEED: u32 = 200;

/// Dial labels are placed every `TOP_SPEED_STEP` km/h.
pub const TOP_SPEED_STEP: u32 = 20;

/// Above this top speed the minor (odd tens) labels no longer fit.
pub const MINOR_LABEL_LIMIT: u32 = 260;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Control tick for held pedals and speed decay.
pub const CONTROL_TICK: Duration = Duration::from_millis(5);

/// Turn indicator flash interval.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(600);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_millis(1500);

/// Creator panel slide time on the start screen.
pub const CREATOR_SLIDE: Duration = Duration::from_millis(600);

/// Loading bar run time.
pub const LOADING_DURATION: Duration = Duration::from_millis(3000);

// =============================================================================
// Startup Sequence Stages
// =============================================================================

pub const INDICATOR_SLIDE: Duration = Duration::from_millis(500);
pub const HEADER_DROP: Duration = Duration::from_millis(300);
pub const GAUGE_RISE: Duration = Duration::from_millis(500);
pub const SWEEP_LEG: Duration = Duration::from_millis(1000);
pub const SWEEP_PAUSE: Duration = Duration::from_millis(50);
pub const SELF_TEST_LOOP: Duration = Duration::from_millis(200);
pub const SELF_TEST_LOOPS: u32 = 10;
