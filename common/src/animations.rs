//! Color transitions for the status lamps.
//!
//! Lamps fade between their unlit and lit colors over a few frames instead
//! of snapping. Each lamp tracks:
//! 1. The color currently drawn
//! 2. The color it is heading toward
//! 3. Whether it is still moving
//!
//! Interpolation works on the raw Rgb565 channels with 8-bit fixed-point
//! math. Every step moves each differing channel at least one unit, so a
//! transition always reaches its target.
//!
//! [`lerp_rgb565`] is also used directly for static blends such as the
//! background bands and the speedometer zone ring.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

// =============================================================================
// Lamp Indices
// =============================================================================

/// Number of lamps with animated colors.
pub const LAMP_COUNT: usize = 5;

/// Lamp indices into [`ColorTransition`].
pub mod lamp_idx {
    pub const HEADER: usize = 0;
    pub const HORN: usize = 1;
    pub const CHARGING: usize = 2;
    pub const BRAKE: usize = 3;
    pub const ACCELERATOR: usize = 4;
}

// =============================================================================
// Color Transition Constants
// =============================================================================

/// Fraction of the remaining distance covered per frame.
/// At 0.5 a lamp settles in about 6 frames (~120ms at 50 FPS), inside one
/// 200 ms self-test loop.
const COLOR_LERP_SPEED: f32 = 0.5;

/// Colors within this Manhattan distance snap to the target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

// =============================================================================
// Color Transition State
// =============================================================================

/// Per-lamp fading colors.
pub struct ColorTransition {
    current_colors: [Rgb565; LAMP_COUNT],
    target_colors: [Rgb565; LAMP_COUNT],
    transitioning: [bool; LAMP_COUNT],
}

impl ColorTransition {
    /// Start every lamp settled at `initial`.
    pub const fn new(initial: [Rgb565; LAMP_COUNT]) -> Self {
        Self { current_colors: initial, target_colors: initial, transitioning: [false; LAMP_COUNT] }
    }

    /// Set a lamp's target color. Returns `true` if a new transition started.
    pub fn set_target(&mut self, lamp: usize, target: Rgb565) -> bool {
        if self.target_colors[lamp] == target {
            false
        } else {
            self.target_colors[lamp] = target;
            self.transitioning[lamp] = true;
            true
        }
    }

    /// Color to draw this frame.
    #[inline]
    pub const fn get_current(&self, lamp: usize) -> Rgb565 { self.current_colors[lamp] }

    /// Whether any lamp is still fading.
    pub fn is_animating(&self) -> bool { self.transitioning.iter().any(|&t| t) }

    /// Advance all transitions by one frame.
    ///
    /// Returns a bitmask of lamps whose color changed.
    pub fn update(&mut self) -> u8 {
        let mut changed: u8 = 0;

        for i in 0..LAMP_COUNT {
            if !self.transitioning[i] {
                continue;
            }
            let current = self.current_colors[i];
            let target = self.target_colors[i];

            if current == target {
                self.transitioning[i] = false;
                continue;
            }

            let new_color = lerp_rgb565(current, target, COLOR_LERP_SPEED);
            if colors_close_enough(new_color, target) {
                self.current_colors[i] = target;
                self.transitioning[i] = false;
            } else {
                self.current_colors[i] = new_color;
            }

            changed |= 1 << i;
        }

        changed
    }
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (((raw >> 11) & 0x1F) as i32, ((raw >> 5) & 0x3F) as i32, (raw & 0x1F) as i32)
}

/// Linear interpolation between two Rgb565 colors.
///
/// `t` is clamped to `0.0..=1.0`. Any channel that differs moves at least one
/// unit toward `to` when `t > 0`.
pub fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let (from_r, from_g, from_b) = channels(from);
    let (to_r, to_g, to_b) = channels(to);

    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;

    let compute_step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            let step = (delta * t_fixed) >> 8;
            if step == 0 {
                if delta > 0 { 1 } else { -1 }
            } else {
                step
            }
        }
    };

    let r = (from_r + compute_step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + compute_step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + compute_step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Three-stop gradient: `start` at 0, `mid` at 0.5, `end` at 1.
pub fn gradient3(start: Rgb565, mid: Rgb565, end: Rgb565, t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.5 { lerp_rgb565(start, mid, t * 2.0) } else { lerp_rgb565(mid, end, (t - 0.5) * 2.0) }
}

/// Manhattan distance check in Rgb565 channel space.
fn colors_close_enough(a: Rgb565, b: Rgb565) -> bool {
    let (a_r, a_g, a_b) = channels(a);
    let (b_r, b_g, b_b) = channels(b);
    let diff = (a_r - b_r).abs() + (a_g - b_g).abs() + (a_b - b_b).abs();
    diff <= COLOR_SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, BRAKE_ON, LAMP_OFF, RED, WHITE};

    // -------------------------------------------------------------------------
    // Color Interpolation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_lerp_rgb565_endpoints() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 0.0), BLACK, "At t=0, should return 'from' color");
        assert_eq!(lerp_rgb565(BLACK, WHITE, 1.0), WHITE, "At t=1, should return 'to' color");
        assert_eq!(lerp_rgb565(RED, RED, 0.5), RED);
    }

    #[test]
    fn test_lerp_rgb565_clamps_t() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 2.0), WHITE);
        assert_eq!(lerp_rgb565(BLACK, WHITE, -1.0), BLACK);
    }

    #[test]
    fn test_lerp_rgb565_midpoint() {
        let (r, g, b) = channels(lerp_rgb565(BLACK, WHITE, 0.5));
        assert!(r > 10 && r < 20, "Red component should be around midpoint");
        assert!(g > 25 && g < 40, "Green component should be around midpoint");
        assert!(b > 10 && b < 20, "Blue component should be around midpoint");
    }

    #[test]
    fn test_lerp_rgb565_minimum_step() {
        let from = Rgb565::new(10, 20, 10);
        let to = Rgb565::new(11, 21, 11);
        assert_eq!(lerp_rgb565(from, to, 0.01), to, "Tiny t should still move one unit");
    }

    #[test]
    fn test_gradient3_stops() {
        assert_eq!(gradient3(BLACK, RED, WHITE, 0.0), BLACK);
        assert_eq!(gradient3(BLACK, RED, WHITE, 0.5), RED);
        assert_eq!(gradient3(BLACK, RED, WHITE, 1.0), WHITE);
    }

    // -------------------------------------------------------------------------
    // Transition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_transition_reaches_target() {
        let mut transition = ColorTransition::new([LAMP_OFF; LAMP_COUNT]);
        assert!(transition.set_target(lamp_idx::BRAKE, BRAKE_ON));
        assert!(!transition.set_target(lamp_idx::BRAKE, BRAKE_ON), "Same target should not restart");

        let mut frames = 0;
        while transition.is_animating() {
            let changed = transition.update();
            if changed != 0 {
                assert_eq!(changed, 1 << lamp_idx::BRAKE);
            }
            frames += 1;
            assert!(frames < 50, "Transition should settle");
        }
        assert_eq!(transition.get_current(lamp_idx::BRAKE), BRAKE_ON);
        assert_eq!(transition.get_current(lamp_idx::HORN), LAMP_OFF);
    }

    #[test]
    fn test_transition_settles_within_self_test_loop() {
        let mut transition = ColorTransition::new([LAMP_OFF; LAMP_COUNT]);
        transition.set_target(lamp_idx::BRAKE, BRAKE_ON);
        // 200 ms at 50 FPS
        for _ in 0..10 {
            transition.update();
        }
        assert_eq!(transition.get_current(lamp_idx::BRAKE), BRAKE_ON);
    }

    #[test]
    fn test_colors_close_enough() {
        assert!(colors_close_enough(RED, RED));
        assert!(!colors_close_enough(BLACK, WHITE));
        assert!(colors_close_enough(Rgb565::new(15, 32, 15), Rgb565::new(16, 32, 16)));
    }
}
