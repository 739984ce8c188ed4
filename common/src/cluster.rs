//! The instrument cluster as one state machine.
//!
//! [`Cluster`] ties together the gauge values, the indicator blinker, the
//! startup sequence, the lamp color fades and the active popup. It is driven
//! by two calls:
//!
//! - [`Cluster::apply`] for every external state change ([`Command`])
//! - [`Cluster::advance`] once per frame with the elapsed time
//!
//! Time only moves through `advance`, so the whole cluster can be stepped
//! deterministically in tests.
//!
//! # Control Tick
//!
//! Held pedals and the speed decay run on a fixed 5 ms step. `advance`
//! accumulates frame time and runs as many control ticks as fit, so needle
//! speed does not depend on frame rate. Control ticks are skipped while the
//! startup sweep owns the needle.
//!
//! Lamp fades step the same way, once per 20 ms of accumulated time.

use core::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;

use crate::animations::{ColorTransition, LAMP_COUNT, lamp_idx};
use crate::colors::{
    ACCELERATOR_ON,
    BRAKE_ON,
    CHARGING_ON,
    HEADER_ALERT,
    HEADER_NORMAL,
    HORN_ON,
    LAMP_OFF,
};
use crate::command::Command;
use crate::config::{CONTROL_TICK, DEFAULT_TOP_SPEED, FRAME_TIME, POPUP_DURATION};
use crate::gauge::{GaugeState, SpeedRange};
use crate::indicator::{IndicatorBlinker, Side};
use crate::startup::{CHARGING_RESTORE_STEP, StartupFrame, StartupSequence, TestLamp};

// =============================================================================
// Settings
// =============================================================================

/// Initial gauge values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClusterSettings {
    pub top_speed: u32,
    pub battery: u8,
    pub charging: bool,
    pub auto_reset: bool,
}

impl Default for ClusterSettings {
    fn default() -> Self { Self { top_speed: DEFAULT_TOP_SPEED, battery: 100, charging: false, auto_reset: true } }
}

// =============================================================================
// Popup
// =============================================================================

/// Active popup with the time it has been on screen.
///
/// Only one popup shows at a time; a new one replaces the old.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Popup {
    /// "AUTO RESET ON/OFF".
    AutoReset { enabled: bool, age: Duration },
    /// "RANGE" over "0-240 KM/H".
    Range { top: u32, age: Duration },
}

impl Popup {
    #[inline]
    pub const fn age(&self) -> Duration {
        match self {
            Self::AutoReset { age, .. } | Self::Range { age, .. } => *age,
        }
    }

    fn advance(&mut self, dt: Duration) {
        match self {
            Self::AutoReset { age, .. } | Self::Range { age, .. } => *age = age.saturating_add(dt),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool { self.age() >= POPUP_DURATION }
}

// =============================================================================
// Lamps
// =============================================================================

/// Effective lamp states for one frame.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Lamps {
    pub left_indicator: bool,
    pub right_indicator: bool,
    /// Header band in the alert color.
    pub header_alert: bool,
    pub horn: bool,
    pub charging: bool,
    pub brake: bool,
    pub accelerator: bool,
}

impl Lamps {
    fn with_test_lamp(mut self, lamp: Option<TestLamp>) -> Self {
        match lamp {
            Some(TestLamp::LeftIndicator) => self.left_indicator = true,
            Some(TestLamp::HeaderAlert) => self.header_alert = true,
            Some(TestLamp::RightIndicator) => self.right_indicator = true,
            Some(TestLamp::Horn) => self.horn = true,
            Some(TestLamp::Charging) => self.charging = true,
            Some(TestLamp::Brake) => self.brake = true,
            Some(TestLamp::Accelerator) => self.accelerator = true,
            None => {}
        }
        self
    }

    /// Target color of each faded lamp, indexed by [`lamp_idx`].
    fn target_colors(&self) -> [Rgb565; LAMP_COUNT] {
        let pick = |on: bool, color: Rgb565| if on { color } else { LAMP_OFF };
        let mut colors = [LAMP_OFF; LAMP_COUNT];
        colors[lamp_idx::HEADER] = if self.header_alert { HEADER_ALERT } else { HEADER_NORMAL };
        colors[lamp_idx::HORN] = pick(self.horn, HORN_ON);
        colors[lamp_idx::CHARGING] = pick(self.charging, CHARGING_ON);
        colors[lamp_idx::BRAKE] = pick(self.brake, BRAKE_ON);
        colors[lamp_idx::ACCELERATOR] = pick(self.accelerator, ACCELERATOR_ON);
        colors
    }
}

// =============================================================================
// Cluster
// =============================================================================

/// Gauge state, animations and popups of the instrument cluster.
pub struct Cluster {
    gauge: GaugeState,
    blinker: IndicatorBlinker,
    startup: Option<StartupSequence>,
    frame: StartupFrame,
    /// Charging lamp forced on by the self-test, waiting to be restored.
    charging_forced: bool,
    tick_elapsed: Duration,
    fade_elapsed: Duration,
    transitions: ColorTransition,
    popup: Option<Popup>,
}

impl Cluster {
    pub fn new(settings: ClusterSettings) -> Self {
        let mut gauge = GaugeState::new();
        gauge.set_range(settings.top_speed);
        gauge.set_battery(settings.battery);
        gauge.set_charging(settings.charging);
        gauge.set_auto_reset(settings.auto_reset);

        let mut cluster = Self {
            gauge,
            blinker: IndicatorBlinker::new(),
            startup: None,
            frame: StartupFrame::REVEALED,
            charging_forced: false,
            tick_elapsed: Duration::ZERO,
            fade_elapsed: Duration::ZERO,
            transitions: ColorTransition::new([LAMP_OFF; LAMP_COUNT]),
            popup: None,
        };
        cluster.transitions = ColorTransition::new(cluster.lamps().target_colors());
        cluster
    }

    // -------------------------------------------------------------------------
    // External calls
    // -------------------------------------------------------------------------

    /// Execute one external state-change call.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetSpeedRange(top) => {
                let range = self.gauge.set_range(top);
                self.popup = Some(Popup::Range { top: range.top(), age: Duration::ZERO });
            }
            Command::ApplyAccelerator => self.gauge.set_accelerator(true),
            Command::ReleaseAccelerator => self.gauge.set_accelerator(false),
            Command::SetSpeed(kmh) => self.gauge.set_speed(kmh),
            Command::SetAutoReset(enabled) => {
                if self.gauge.auto_reset() != enabled {
                    self.popup = Some(Popup::AutoReset { enabled, age: Duration::ZERO });
                }
                self.gauge.set_auto_reset(enabled);
            }
            Command::ApplyBrake => self.gauge.set_brake(true),
            Command::ReleaseBrake => self.gauge.set_brake(false),
            Command::SoundHorn => self.gauge.set_horn(true),
            Command::OffHorn => self.gauge.set_horn(false),
            Command::ToggleIndicator(side) => self.blinker.toggle(side),
            Command::SetBattery(percent) => self.gauge.set_battery(percent),
            Command::ChargingOn => self.set_charging(true),
            Command::ChargingOff => self.set_charging(false),
        }
    }

    fn set_charging(&mut self, on: bool) {
        self.gauge.set_charging(on);
        self.charging_forced = false;
    }

    /// Begin the startup animation. Restarts it if already running.
    pub fn start_up(&mut self) {
        let sequence = StartupSequence::new();
        self.frame = sequence.frame();
        self.startup = Some(sequence);
    }

    #[inline]
    pub const fn is_starting_up(&self) -> bool { self.startup.is_some() }

    // -------------------------------------------------------------------------
    // Time
    // -------------------------------------------------------------------------

    /// Advance every timer by `dt`. Call once per frame.
    pub fn advance(&mut self, dt: Duration) {
        self.advance_startup(dt);
        self.blinker.advance(dt);

        self.tick_elapsed += dt;
        while self.tick_elapsed >= CONTROL_TICK {
            self.tick_elapsed -= CONTROL_TICK;
            if self.frame.sweep.is_none() {
                self.gauge.control_tick();
            }
        }

        if let Some(popup) = self.popup.as_mut() {
            popup.advance(dt);
            if popup.is_expired() {
                self.popup = None;
            }
        }

        let targets = self.lamps().target_colors();
        for (lamp, target) in targets.into_iter().enumerate() {
            self.transitions.set_target(lamp, target);
        }
        self.fade_elapsed += dt;
        while self.fade_elapsed >= FRAME_TIME {
            self.fade_elapsed -= FRAME_TIME;
            if self.transitions.update() == 0 {
                self.fade_elapsed = Duration::ZERO;
                break;
            }
        }
    }

    fn advance_startup(&mut self, dt: Duration) {
        let Some(sequence) = self.startup.as_mut() else {
            return;
        };
        sequence.advance(dt);
        let finished = sequence.is_finished();
        self.frame = sequence.frame();

        if let Some(needle) = self.frame.sweep {
            self.gauge.set_needle(needle);
        }

        match self.frame.self_test {
            Some(_) if self.frame.test_lamp() == Some(TestLamp::Charging) => {
                if !self.charging_forced {
                    self.gauge.show_charging(true);
                    self.charging_forced = true;
                }
            }
            Some(step) if step >= CHARGING_RESTORE_STEP => self.restore_charging(),
            None => self.restore_charging(),
            _ => {}
        }

        if finished {
            self.gauge.set_needle(0.0);
            self.startup = None;
            self.frame = StartupFrame::REVEALED;
        }
    }

    fn restore_charging(&mut self) {
        if self.charging_forced {
            self.gauge.restore_charging();
            self.charging_forced = false;
        }
    }

    // -------------------------------------------------------------------------
    // Drawing inputs
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn gauge(&self) -> &GaugeState { &self.gauge }

    #[inline]
    pub const fn range(&self) -> SpeedRange { self.gauge.range() }

    #[inline]
    pub const fn blinker(&self) -> &IndicatorBlinker { &self.blinker }

    /// Startup stage progress, fully revealed once the sequence is done.
    #[inline]
    pub const fn frame(&self) -> StartupFrame { self.frame }

    #[inline]
    pub const fn popup(&self) -> Option<Popup> { self.popup }

    /// Lamp states to draw, combining gauge state with the self-test.
    pub fn lamps(&self) -> Lamps {
        Lamps {
            left_indicator: self.blinker.is_lit(Side::Left),
            right_indicator: self.blinker.is_lit(Side::Right),
            header_alert: self.gauge.brake(),
            horn: self.gauge.horn(),
            charging: self.gauge.charging(),
            brake: self.gauge.brake(),
            accelerator: self.gauge.accelerator(),
        }
        .with_test_lamp(self.frame.test_lamp())
    }

    /// Faded color of one lamp, indexed by [`lamp_idx`].
    #[inline]
    pub const fn lamp_color(&self, lamp: usize) -> Rgb565 { self.transitions.get_current(lamp) }
}

impl Default for Cluster {
    fn default() -> Self { Self::new(ClusterSettings::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
