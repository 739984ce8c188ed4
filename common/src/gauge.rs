//! Gauge state: the values that decide what the cluster draws each frame.
//!
//! Speed is stored as a needle angle rather than km/h. The speedometer has
//! 300 degrees of travel, and the dial's top speed decides how many km/h one
//! degree is worth (the *angle factor*). Held pedals and the speed decay both
//! move the needle by whole factors per control tick, which keeps the needle
//! speed independent of the selected range.
//!
//! # Control Tick
//!
//! | Accelerator | Brake | Auto reset | Needle change per tick |
//! |-------------|-------|------------|------------------------|
//! | held        | no    | any        | `+factor` (capped at 300) |
//! | released    | no    | on         | `-factor` |
//! | released    | yes   | on         | `-5 * factor` |
//! | held        | yes   | on         | `-2 * factor` |
//! | any         | any   | off        | unchanged (except acceleration) |
//!
//! The needle never leaves `0..=300` and never rises while the brake is held.

use crate::config::{
    BATTERY_DEG_PER_PERCENT,
    BATTERY_EMPTY_DEG,
    DEFAULT_TOP_SPEED,
    MAX_TOP_SPEED,
    MIN_TOP_SPEED,
    MINOR_LABEL_LIMIT,
    NEEDLE_SWEEP_DEG,
    SPEED_ZERO_DEG,
    TOP_SPEED_STEP,
};
use crate::math::round;

// =============================================================================
// Speed Range
// =============================================================================

/// Top speed of the speedometer dial in km/h.
///
/// Always a multiple of 20 between 40 and 400.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpeedRange {
    top: u32,
}

impl SpeedRange {
    /// Normalize a requested top speed.
    ///
    /// Values outside 40..=400 are clamped; anything else snaps to the
    /// nearest multiple of 20, with a remainder of 10 rounding up.
    pub const fn new(top: u32) -> Self {
        let top = if top < MIN_TOP_SPEED {
            MIN_TOP_SPEED
        } else if top > MAX_TOP_SPEED {
            MAX_TOP_SPEED
        } else {
            let rem = top % TOP_SPEED_STEP;
            if rem >= TOP_SPEED_STEP / 2 { top - rem + TOP_SPEED_STEP } else { top - rem }
        };
        Self { top }
    }

    #[inline]
    pub const fn top(self) -> u32 { self.top }

    /// km/h per degree of needle travel.
    #[inline]
    pub fn angle_factor(self) -> f32 { self.top as f32 / NEEDLE_SWEEP_DEG }

    /// Number of labelled major ticks, including 0 and the top speed.
    #[inline]
    pub const fn major_count(self) -> u32 { self.top / TOP_SPEED_STEP + 1 }

    /// Degrees between neighbouring major ticks.
    #[inline]
    pub fn major_step_deg(self) -> f32 { NEEDLE_SWEEP_DEG / (self.top / TOP_SPEED_STEP) as f32 }

    /// Label of major tick `index`.
    #[inline]
    pub const fn major_label(self, index: u32) -> u32 { index * TOP_SPEED_STEP }

    /// Screen angle of major tick `index`.
    #[inline]
    pub fn major_angle(self, index: u32) -> f32 { SPEED_ZERO_DEG + index as f32 * self.major_step_deg() }

    /// Number of minor ticks (one between each pair of majors).
    #[inline]
    pub const fn minor_count(self) -> u32 { self.top / TOP_SPEED_STEP }

    /// Label of minor tick `index` (10, 30, 50, ..).
    #[inline]
    pub const fn minor_label(self, index: u32) -> u32 { index * TOP_SPEED_STEP + TOP_SPEED_STEP / 2 }

    /// Screen angle of minor tick `index`, halfway between two majors.
    #[inline]
    pub fn minor_angle(self, index: u32) -> f32 {
        SPEED_ZERO_DEG + (index as f32 + 0.5) * self.major_step_deg()
    }

    /// Whether the minor ticks get numeric labels. Dense dials skip them.
    #[inline]
    pub const fn shows_minor_labels(self) -> bool { self.top <= MINOR_LABEL_LIMIT }
}

impl Default for SpeedRange {
    fn default() -> Self { Self::new(DEFAULT_TOP_SPEED) }
}

// =============================================================================
// Battery Zones
// =============================================================================

/// Colored zone of the battery dial.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BatteryZone {
    Empty,
    Low,
    Good,
}

impl BatteryZone {
    pub const ALL: [Self; 3] = [Self::Empty, Self::Low, Self::Good];

    /// Charge covered by the zone as `(from, to)` percent.
    pub const fn percent_range(self) -> (u8, u8) {
        match self {
            Self::Empty => (0, 20),
            Self::Low => (20, 40),
            Self::Good => (40, 100),
        }
    }
}

/// Screen angle of the battery needle at `percent` charge.
///
/// 0 % sits at 417 degrees (57 degrees past a full turn) and 100 % at 237.
#[inline]
pub fn battery_angle(percent: f32) -> f32 { BATTERY_EMPTY_DEG - percent * BATTERY_DEG_PER_PERCENT }

// =============================================================================
// Gauge State
// =============================================================================

/// Numeric and boolean gauge values.
#[derive(Clone, Debug)]
pub struct GaugeState {
    /// Speed as needle travel in degrees, `0..=300`.
    needle: f32,
    range: SpeedRange,
    accelerator: bool,
    brake: bool,
    horn: bool,
    /// Charging lamp as currently shown.
    charging: bool,
    /// Charging state last set from outside. The self-test restores it.
    charging_default: bool,
    auto_reset: bool,
    battery: u8,
}

impl GaugeState {
    pub fn new() -> Self {
        Self {
            needle: 0.0,
            range: SpeedRange::default(),
            accelerator: false,
            brake: false,
            horn: false,
            charging: false,
            charging_default: false,
            auto_reset: true,
            battery: 100,
        }
    }

    // -------------------------------------------------------------------------
    // Speed
    // -------------------------------------------------------------------------

    /// Needle travel in degrees.
    #[inline]
    pub const fn needle(&self) -> f32 { self.needle }

    /// Set the needle directly (startup sweep).
    pub fn set_needle(&mut self, degrees: f32) { self.needle = degrees.clamp(0.0, NEEDLE_SWEEP_DEG); }

    #[inline]
    pub const fn range(&self) -> SpeedRange { self.range }

    /// Replace the dial range. The needle angle is kept, so the displayed
    /// speed rescales with the new dial.
    pub fn set_range(&mut self, top: u32) -> SpeedRange {
        self.range = SpeedRange::new(top);
        self.range
    }

    /// Jump to `kmh`, capped at the dial's top speed.
    pub fn set_speed(&mut self, kmh: u32) {
        let degrees = round(kmh as f32 / self.range.angle_factor());
        self.needle = (degrees.max(0) as f32).min(NEEDLE_SWEEP_DEG);
    }

    /// Displayed speed in whole km/h.
    pub fn speed_kmh(&self) -> u32 { round(self.needle * self.range.angle_factor()).max(0) as u32 }

    /// Screen angle of the speedometer needle.
    #[inline]
    pub fn speed_needle_angle(&self) -> f32 { SPEED_ZERO_DEG + self.needle }

    // -------------------------------------------------------------------------
    // Pedals and lamps
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn accelerator(&self) -> bool { self.accelerator }

    pub fn set_accelerator(&mut self, held: bool) { self.accelerator = held; }

    #[inline]
    pub const fn brake(&self) -> bool { self.brake }

    pub fn set_brake(&mut self, held: bool) { self.brake = held; }

    #[inline]
    pub const fn horn(&self) -> bool { self.horn }

    pub fn set_horn(&mut self, on: bool) { self.horn = on; }

    #[inline]
    pub const fn charging(&self) -> bool { self.charging }

    #[inline]
    pub const fn charging_default(&self) -> bool { self.charging_default }

    /// Set the charging lamp and remember it as the default.
    pub fn set_charging(&mut self, on: bool) {
        self.charging = on;
        self.charging_default = on;
    }

    /// Show the charging lamp without changing the remembered default.
    pub fn show_charging(&mut self, on: bool) { self.charging = on; }

    /// Put the charging lamp back to its remembered default.
    pub fn restore_charging(&mut self) { self.charging = self.charging_default; }

    #[inline]
    pub const fn auto_reset(&self) -> bool { self.auto_reset }

    pub fn set_auto_reset(&mut self, enabled: bool) { self.auto_reset = enabled; }

    // -------------------------------------------------------------------------
    // Battery
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn battery(&self) -> u8 { self.battery }

    /// Set the charge, clamped to 100.
    pub fn set_battery(&mut self, percent: u8) { self.battery = percent.min(100); }

    #[inline]
    pub fn battery_needle_angle(&self) -> f32 { battery_angle(f32::from(self.battery)) }

    // -------------------------------------------------------------------------
    // Control tick
    // -------------------------------------------------------------------------

    /// One control step: held accelerator, then speed decay.
    pub fn control_tick(&mut self) {
        let factor = self.range.angle_factor();

        if self.accelerator && !self.brake && self.needle < NEEDLE_SWEEP_DEG {
            self.needle = (self.needle + factor).min(NEEDLE_SWEEP_DEG);
        }

        if self.needle > 0.0 && self.auto_reset {
            if !self.accelerator {
                self.needle -= if self.brake { 3.0 * factor } else { factor };
            }
            if self.brake {
                self.needle -= 2.0 * factor;
            }
            self.needle = self.needle.max(0.0);
        }
    }
}

impl Default for GaugeState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Speed Range Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_range_clamps() {
        assert_eq!(SpeedRange::new(0).top(), 40);
        assert_eq!(SpeedRange::new(39).top(), 40);
        assert_eq!(SpeedRange::new(401).top(), 400);
        assert_eq!(SpeedRange::new(10_000).top(), 400);
    }

    #[test]
    fn test_range_rounds_to_twenty() {
        assert_eq!(SpeedRange::new(249).top(), 240);
        assert_eq!(SpeedRange::new(250).top(), 260);
        assert_eq!(SpeedRange::new(200).top(), 200);
        assert_eq!(SpeedRange::new(395).top(), 400);
        assert_eq!(SpeedRange::new(41).top(), 40);
    }

    #[test]
    fn test_range_default() {
        assert_eq!(SpeedRange::default().top(), 200);
        assert!((SpeedRange::default().angle_factor() - 200.0 / 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_range_ticks() {
        let range = SpeedRange::new(200);
        assert_eq!(range.major_count(), 11);
        assert_eq!(range.major_label(10), 200);
        assert!((range.major_step_deg() - 30.0).abs() < 1e-4);
        assert!((range.major_angle(0) - 120.0).abs() < 1e-4);
        assert!((range.major_angle(10) - 420.0).abs() < 1e-3);
        assert_eq!(range.minor_count(), 10);
        assert_eq!(range.minor_label(0), 10);
        assert_eq!(range.minor_label(9), 190);
        assert!((range.minor_angle(0) - 135.0).abs() < 1e-4);
    }

    #[test]
    fn test_range_minor_labels_limit() {
        assert!(SpeedRange::new(260).shows_minor_labels());
        assert!(!SpeedRange::new(280).shows_minor_labels());
        assert!(SpeedRange::new(40).shows_minor_labels());
    }

    // -------------------------------------------------------------------------
    // Speed Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_speed_round_trip() {
        let mut gauge = GaugeState::new();
        gauge.set_speed(100);
        assert_eq!(gauge.needle(), 150.0);
        assert_eq!(gauge.speed_kmh(), 100);
    }

    #[test]
    fn test_set_speed_caps_at_top() {
        let mut gauge = GaugeState::new();
        gauge.set_speed(500);
        assert_eq!(gauge.needle(), 300.0);
        assert_eq!(gauge.speed_kmh(), 200);
    }

    #[test]
    fn test_set_range_keeps_needle() {
        let mut gauge = GaugeState::new();
        gauge.set_speed(100);
        gauge.set_range(400);
        assert_eq!(gauge.needle(), 150.0, "Range change should keep the needle angle");
        assert_eq!(gauge.speed_kmh(), 200);
    }

    #[test]
    fn test_speed_needle_angle() {
        let mut gauge = GaugeState::new();
        assert_eq!(gauge.speed_needle_angle(), 120.0);
        gauge.set_speed(200);
        assert_eq!(gauge.speed_needle_angle(), 420.0);
    }

    // -------------------------------------------------------------------------
    // Control Tick Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_accelerate_rises_by_factor() {
        let mut gauge = GaugeState::new();
        gauge.set_range(300);
        gauge.set_accelerator(true);
        for _ in 0..10 {
            gauge.control_tick();
        }
        assert!((gauge.needle() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_accelerate_caps_at_sweep() {
        let mut gauge = GaugeState::new();
        gauge.set_accelerator(true);
        for _ in 0..1000 {
            gauge.control_tick();
        }
        assert_eq!(gauge.needle(), 300.0);
        assert_eq!(gauge.speed_kmh(), 200);
    }

    #[test]
    fn test_coast_decays_by_factor() {
        let mut gauge = GaugeState::new();
        gauge.set_range(300);
        gauge.set_speed(100);
        gauge.control_tick();
        assert!((gauge.needle() - 99.0).abs() < 1e-4);
    }

    #[test]
    fn test_brake_decays_by_five_factors() {
        let mut gauge = GaugeState::new();
        gauge.set_range(300);
        gauge.set_speed(100);
        gauge.set_brake(true);
        gauge.control_tick();
        assert!((gauge.needle() - 95.0).abs() < 1e-4);
    }

    #[test]
    fn test_brake_with_accelerator_decays_by_two_factors() {
        let mut gauge = GaugeState::new();
        gauge.set_range(300);
        gauge.set_speed(100);
        gauge.set_accelerator(true);
        gauge.set_brake(true);
        gauge.control_tick();
        assert!((gauge.needle() - 98.0).abs() < 1e-4, "Brake should win over the accelerator");
    }

    #[test]
    fn test_decay_clamps_at_zero() {
        let mut gauge = GaugeState::new();
        gauge.set_speed(1);
        gauge.set_brake(true);
        for _ in 0..10 {
            gauge.control_tick();
        }
        assert_eq!(gauge.needle(), 0.0);
    }

    #[test]
    fn test_auto_reset_off_holds_speed() {
        let mut gauge = GaugeState::new();
        gauge.set_speed(120);
        gauge.set_auto_reset(false);
        gauge.set_brake(true);
        for _ in 0..100 {
            gauge.control_tick();
        }
        assert_eq!(gauge.speed_kmh(), 120, "Speed should hold with auto reset disabled");
    }

    #[test]
    fn test_never_rises_while_braking() {
        let mut gauge = GaugeState::new();
        gauge.set_auto_reset(false);
        gauge.set_accelerator(true);
        gauge.set_brake(true);
        gauge.set_speed(50);
        let before = gauge.needle();
        gauge.control_tick();
        assert_eq!(gauge.needle(), before);
    }

    // -------------------------------------------------------------------------
    // Battery Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_battery_clamps() {
        let mut gauge = GaugeState::new();
        gauge.set_battery(150);
        assert_eq!(gauge.battery(), 100);
        gauge.set_battery(0);
        assert_eq!(gauge.battery(), 0);
    }

    #[test]
    fn test_battery_angles() {
        assert!((battery_angle(100.0) - 237.0).abs() < 1e-3);
        assert!((battery_angle(0.0) - 417.0).abs() < 1e-3);
        assert!((battery_angle(50.0) - 327.0).abs() < 1e-3);
    }

    #[test]
    fn test_battery_zones_cover_scale() {
        let mut next = 0;
        for zone in BatteryZone::ALL {
            let (from, to) = zone.percent_range();
            assert_eq!(from, next, "{zone:?} should start where the previous zone ended");
            assert!(to > from);
            next = to;
        }
        assert_eq!(next, 100);
    }

    #[test]
    fn test_charging_default_restored() {
        let mut gauge = GaugeState::new();
        gauge.set_charging(true);
        assert!(gauge.charging_default());
        gauge.set_charging(false);
        assert!(!gauge.charging());
        assert!(!gauge.charging_default());

        gauge.show_charging(true);
        assert!(gauge.charging());
        assert!(!gauge.charging_default(), "Showing the lamp should not change the default");
        gauge.restore_charging();
        assert!(!gauge.charging());
    }
}
