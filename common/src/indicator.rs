//! Turn indicator blinking.
//!
//! Both indicators share one 600 ms blink timer. Toggling a side on restarts
//! the timer, so the first flash lands one full interval after the toggle.
//! Toggling the last active side off runs one blink step right away, which
//! darkens both lamps, and stops the timer.

use core::time::Duration;

use crate::config::BLINK_INTERVAL;

/// Which turn indicator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
struct Lamp {
    active: bool,
    lit: bool,
    /// Value the next blink step shows when active.
    phase: bool,
}

impl Lamp {
    const OFF: Self = Self { active: false, lit: false, phase: true };

    fn blink_step(&mut self) {
        if self.active {
            self.lit = self.phase;
            self.phase = !self.phase;
        } else {
            self.lit = false;
        }
    }
}

/// Blink state for both turn indicators.
#[derive(Clone, Debug)]
pub struct IndicatorBlinker {
    left: Lamp,
    right: Lamp,
    running: bool,
    elapsed: Duration,
}

impl IndicatorBlinker {
    pub const fn new() -> Self {
        Self { left: Lamp::OFF, right: Lamp::OFF, running: false, elapsed: Duration::ZERO }
    }

    const fn lamp(&self, side: Side) -> &Lamp {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Flip one indicator on or off.
    pub fn toggle(&mut self, side: Side) {
        let lamp = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        lamp.active = !lamp.active;
        if lamp.active {
            lamp.phase = true;
        }

        if self.left.active || self.right.active {
            self.running = true;
            self.elapsed = Duration::ZERO;
        } else {
            self.blink_step();
            self.running = false;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Advance the blink timer, running one step per full interval.
    pub fn advance(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= BLINK_INTERVAL {
            self.elapsed -= BLINK_INTERVAL;
            self.blink_step();
        }
    }

    fn blink_step(&mut self) {
        self.left.blink_step();
        self.right.blink_step();
    }

    #[inline]
    pub const fn is_active(&self, side: Side) -> bool { self.lamp(side).active }

    #[inline]
    pub const fn is_lit(&self, side: Side) -> bool { self.lamp(side).lit }

    /// Whether the blink timer is running.
    #[inline]
    pub const fn is_running(&self) -> bool { self.running }
}

impl Default for IndicatorBlinker {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Duration = Duration::from_millis(300);

    #[test]
    fn test_starts_dark_and_idle() {
        let blinker = IndicatorBlinker::new();
        assert!(!blinker.is_running());
        assert!(!blinker.is_lit(Side::Left));
        assert!(!blinker.is_lit(Side::Right));
    }

    #[test]
    fn test_first_flash_after_one_interval() {
        let mut blinker = IndicatorBlinker::new();
        blinker.toggle(Side::Left);
        assert!(blinker.is_running());
        assert!(!blinker.is_lit(Side::Left), "Lamp should wait one interval before lighting");

        blinker.advance(HALF);
        assert!(!blinker.is_lit(Side::Left));
        blinker.advance(HALF);
        assert!(blinker.is_lit(Side::Left), "Lamp should light after 600ms");
        blinker.advance(BLINK_INTERVAL);
        assert!(!blinker.is_lit(Side::Left), "Lamp should go dark on the next step");
        blinker.advance(BLINK_INTERVAL);
        assert!(blinker.is_lit(Side::Left));
        assert!(!blinker.is_lit(Side::Right), "Inactive side should stay dark");
    }

    #[test]
    fn test_toggle_off_darkens_immediately() {
        let mut blinker = IndicatorBlinker::new();
        blinker.toggle(Side::Right);
        blinker.advance(BLINK_INTERVAL);
        assert!(blinker.is_lit(Side::Right));

        blinker.toggle(Side::Right);
        assert!(!blinker.is_lit(Side::Right));
        assert!(!blinker.is_running());

        blinker.advance(BLINK_INTERVAL * 3);
        assert!(!blinker.is_lit(Side::Right), "Stopped timer should not blink");
    }

    #[test]
    fn test_toggle_restarts_timer() {
        let mut blinker = IndicatorBlinker::new();
        blinker.toggle(Side::Left);
        blinker.advance(Duration::from_millis(500));
        blinker.toggle(Side::Right);
        blinker.advance(Duration::from_millis(500));
        assert!(!blinker.is_lit(Side::Left), "Second toggle should restart the interval");
        blinker.advance(Duration::from_millis(100));
        assert!(blinker.is_lit(Side::Left));
        assert!(blinker.is_lit(Side::Right));
    }

    #[test]
    fn test_one_side_off_keeps_other_blinking() {
        let mut blinker = IndicatorBlinker::new();
        blinker.toggle(Side::Left);
        blinker.toggle(Side::Right);
        blinker.advance(BLINK_INTERVAL);
        blinker.toggle(Side::Left);
        assert!(blinker.is_running());
        assert!(!blinker.is_active(Side::Left));
        blinker.advance(BLINK_INTERVAL);
        assert!(!blinker.is_lit(Side::Left));
    }

    #[test]
    fn test_large_step_runs_every_interval() {
        let mut blinker = IndicatorBlinker::new();
        blinker.toggle(Side::Left);
        // Three steps: lit, dark, lit
        blinker.advance(BLINK_INTERVAL * 3);
        assert!(blinker.is_lit(Side::Left));
    }
}
