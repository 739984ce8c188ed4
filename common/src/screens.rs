//! Boot screen flow and state.
//!
//! The cluster shows up to three screens in order:
//!
//! - [`Screen::Start`]: a round "Start" button, plus an optional creator
//!   button that slides a credits panel in and out
//! - [`Screen::Loading`]: a progress bar with rotating safety rules
//! - [`Screen::Dashboard`]: the instrument cluster, which plays the startup
//!   sequence on entry
//!
//! Either boot screen can be skipped through [`BootOptions`].

use core::time::Duration;

use heapless::Vec;

use crate::config::{CREATOR_SLIDE, LOADING_DURATION};
use crate::math::fraction;

// =============================================================================
// Screen Flow
// =============================================================================

/// Which boot screens to show.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BootOptions {
    pub skip_start: bool,
    pub skip_loading: bool,
    /// Hide the creator button on the start screen.
    pub hide_creator: bool,
}

/// Screens in boot order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Start,
    Loading,
    Dashboard,
}

impl Screen {
    /// First screen shown for `options`.
    pub const fn first(options: BootOptions) -> Self {
        if !options.skip_start {
            Self::Start
        } else if !options.skip_loading {
            Self::Loading
        } else {
            Self::Dashboard
        }
    }

    /// Screen that follows `self`. The dashboard is terminal.
    pub const fn next(self, options: BootOptions) -> Self {
        match self {
            Self::Start if options.skip_loading => Self::Dashboard,
            Self::Start => Self::Loading,
            Self::Loading | Self::Dashboard => Self::Dashboard,
        }
    }
}

// =============================================================================
// Start Screen
// =============================================================================

/// Credits shown on the creator panel.
pub const CREATOR_INFO: [&str; 2] = ["Creator info:", "Prasanna K, github.com/prasanna892"];

/// Start screen button hover and creator panel slide.
#[derive(Clone, Debug)]
pub struct StartScreen {
    show_creator: bool,
    hover: bool,
    /// Panel travel, 0.0 off screen to 1.0 at rest.
    panel: f32,
    opening: bool,
}

impl StartScreen {
    pub const fn new(options: BootOptions) -> Self {
        Self { show_creator: !options.hide_creator, hover: false, panel: 0.0, opening: false }
    }

    #[inline]
    pub const fn shows_creator_button(&self) -> bool { self.show_creator }

    #[inline]
    pub const fn is_hovered(&self) -> bool { self.hover }

    pub fn set_hover(&mut self, hover: bool) { self.hover = hover; }

    /// Reverse the panel's direction from wherever it is.
    pub fn toggle_creator(&mut self) {
        if self.show_creator {
            self.opening = !self.opening;
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        let step = fraction(dt, CREATOR_SLIDE);
        self.panel = if self.opening { (self.panel + step).min(1.0) } else { (self.panel - step).max(0.0) };
    }

    /// Panel travel, 0.0 hidden to 1.0 fully slid in.
    #[inline]
    pub const fn panel(&self) -> f32 { self.panel }
}

// =============================================================================
// Loading Screen
// =============================================================================

/// Safety rules rotated on the loading screen.
pub const SAFETY_RULES: [&str; 6] = [
    "Do not drink and drive.",
    "Always wear a helmet!",
    "Drive within the speed limits.",
    "Don't use mobile phones while driving.",
    "Buckle up before you drive.",
    "Keep a safe distance from vehicles!",
];

/// Heading above the progress bar.
pub const GET_READY: &str = "Get ready for the ride...";

/// Progress bar value when loading starts.
pub const LOADING_START: u32 = 14;

/// Progress bar value when loading completes.
pub const LOADING_END: u32 = 100;

/// The rule changes each time progress passes a multiple of this.
const RULE_PERIOD: u32 = 33;

/// Something the loading loop has to react to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadingEvent {
    /// Show a new random safety rule.
    ChangeRule,
    /// Progress reached 100; move to the dashboard.
    Finished,
}

/// Progress bar driven by elapsed time.
#[derive(Clone, Debug, Default)]
pub struct LoadingScreen {
    elapsed: Duration,
    value: u32,
}

impl LoadingScreen {
    pub const fn new() -> Self { Self { elapsed: Duration::ZERO, value: LOADING_START } }

    /// Progress bar value, 14 to 100.
    #[inline]
    pub const fn value(&self) -> u32 { self.value }

    /// Fill fraction of the bar.
    #[inline]
    pub fn fill(&self) -> f32 { self.value as f32 / LOADING_END as f32 }

    #[inline]
    pub const fn is_finished(&self) -> bool { self.value >= LOADING_END }

    /// Advance the bar and report every event crossed on the way.
    pub fn advance(&mut self, dt: Duration) -> Vec<LoadingEvent, 3> {
        let mut events = Vec::new();
        if self.is_finished() {
            return events;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        let span = (LOADING_END - LOADING_START) as f32;
        let value = LOADING_START + (span * fraction(self.elapsed, LOADING_DURATION)) as u32;

        for crossed in (self.value + 1)..=value {
            if crossed == LOADING_END {
                events.push(LoadingEvent::Finished).ok();
            } else if crossed % RULE_PERIOD == 0 && crossed / RULE_PERIOD < 3 {
                events.push(LoadingEvent::ChangeRule).ok();
            }
        }
        self.value = value;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Screen Flow Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_flow() {
        let options = BootOptions::default();
        assert_eq!(Screen::first(options), Screen::Start);
        assert_eq!(Screen::Start.next(options), Screen::Loading);
        assert_eq!(Screen::Loading.next(options), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.next(options), Screen::Dashboard);
    }

    #[test]
    fn test_skip_start() {
        let options = BootOptions { skip_start: true, ..BootOptions::default() };
        assert_eq!(Screen::first(options), Screen::Loading);
    }

    #[test]
    fn test_skip_loading() {
        let options = BootOptions { skip_loading: true, ..BootOptions::default() };
        assert_eq!(Screen::first(options), Screen::Start);
        assert_eq!(Screen::Start.next(options), Screen::Dashboard);
    }

    #[test]
    fn test_skip_both() {
        let options = BootOptions { skip_start: true, skip_loading: true, hide_creator: false };
        assert_eq!(Screen::first(options), Screen::Dashboard);
    }

    // -------------------------------------------------------------------------
    // Start Screen Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_creator_panel_slides() {
        let mut screen = StartScreen::new(BootOptions::default());
        assert_eq!(screen.panel(), 0.0);
        screen.toggle_creator();
        screen.advance(Duration::from_millis(300));
        assert!((screen.panel() - 0.5).abs() < 1e-4);
        screen.advance(Duration::from_millis(600));
        assert_eq!(screen.panel(), 1.0);
    }

    #[test]
    fn test_creator_panel_reverses_midway() {
        let mut screen = StartScreen::new(BootOptions::default());
        screen.toggle_creator();
        screen.advance(Duration::from_millis(300));
        screen.toggle_creator();
        screen.advance(Duration::from_millis(150));
        assert!((screen.panel() - 0.25).abs() < 1e-4, "Panel should reverse from where it was");
        screen.advance(Duration::from_millis(600));
        assert_eq!(screen.panel(), 0.0);
    }

    #[test]
    fn test_hidden_creator_button_ignores_toggle() {
        let mut screen = StartScreen::new(BootOptions { hide_creator: true, ..BootOptions::default() });
        assert!(!screen.shows_creator_button());
        screen.toggle_creator();
        screen.advance(Duration::from_millis(600));
        assert_eq!(screen.panel(), 0.0);
    }

    // -------------------------------------------------------------------------
    // Loading Screen Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_loading_starts_at_fourteen() {
        let screen = LoadingScreen::new();
        assert_eq!(screen.value(), 14);
        assert!(!screen.is_finished());
    }

    #[test]
    fn test_loading_rule_changes() {
        let mut screen = LoadingScreen::new();
        let mut changes = 0;
        let mut finished = 0;
        for _ in 0..200 {
            for event in screen.advance(Duration::from_millis(20)) {
                match event {
                    LoadingEvent::ChangeRule => changes += 1,
                    LoadingEvent::Finished => finished += 1,
                }
            }
        }
        assert_eq!(changes, 2, "Rule should change at 33 and 66");
        assert_eq!(finished, 1);
        assert_eq!(screen.value(), 100);
    }

    #[test]
    fn test_loading_single_large_step() {
        let mut screen = LoadingScreen::new();
        let events = screen.advance(Duration::from_secs(10));
        assert_eq!(
            events.as_slice(),
            &[LoadingEvent::ChangeRule, LoadingEvent::ChangeRule, LoadingEvent::Finished]
        );
        assert!(screen.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_loading_finishes_on_time() {
        let mut screen = LoadingScreen::new();
        screen.advance(Duration::from_millis(2990));
        assert!(!screen.is_finished());
        screen.advance(Duration::from_millis(10));
        assert!(screen.is_finished());
    }
}
