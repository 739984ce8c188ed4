//! Color constants for the instrument cluster.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Most palette entries are written as 8-bit RGB triples and narrowed with
//! [`rgb`] so they can be compared against design references directly.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Narrow an 8-bit-per-channel color to Rgb565 at compile time.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 { Rgb565::new(r >> 3, g >> 2, b >> 3) }

// =============================================================================
// Standard Colors
// =============================================================================

pub const BLACK: Rgb565 = Rgb565::BLACK;
pub const WHITE: Rgb565 = Rgb565::WHITE;
pub const RED: Rgb565 = Rgb565::RED;
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Background
// =============================================================================

/// Top-left corner of the background gradient.
pub const BG_DARK: Rgb565 = BLACK;

/// Middle band of the background gradient (deep red glow).
pub const BG_GLOW: Rgb565 = rgb(56, 0, 0);

/// Bottom-right corner of the background gradient.
pub const BG_EDGE: Rgb565 = rgb(16, 0, 0);

// =============================================================================
// Header
// =============================================================================

/// Header band color while driving normally.
pub const HEADER_NORMAL: Rgb565 = rgb(218, 112, 214);

/// Header band color while the brake is held.
pub const HEADER_ALERT: Rgb565 = RED;

/// Header pocket fill behind the clock.
pub const HEADER_POCKET: Rgb565 = rgb(36, 46, 37);

/// Header outline stroke.
pub const HEADER_OUTLINE: Rgb565 = rgb(252, 227, 138);

/// Clock text.
pub const CLOCK_TEXT: Rgb565 = rgb(127, 255, 200);

// =============================================================================
// Lamps
// =============================================================================

/// Turn indicator when dark.
pub const INDICATOR_OFF: Rgb565 = rgb(0, 128, 0);

/// Turn indicator when flashing.
pub const INDICATOR_ON: Rgb565 = rgb(0, 255, 0);

/// Shared "unlit" color for the horn waves and status words.
pub const LAMP_OFF: Rgb565 = rgb(67, 13, 13);

pub const HORN_ON: Rgb565 = rgb(0, 200, 255);
pub const CHARGING_ON: Rgb565 = rgb(207, 217, 223);
pub const BRAKE_ON: Rgb565 = rgb(255, 120, 80);
pub const ACCELERATOR_ON: Rgb565 = rgb(249, 212, 35);

/// Horn body fill and outline.
pub const HORN_BODY: Rgb565 = rgb(150, 152, 160);
pub const HORN_EDGE: Rgb565 = rgb(90, 90, 90);

// =============================================================================
// Dials
// =============================================================================

/// Outer dial ring and speedometer hub.
pub const DIAL_RING: Rgb565 = rgb(34, 225, 255);

/// Tick marks and tick labels.
pub const DIAL_TICK: Rgb565 = rgb(172, 203, 238);

/// Speedometer needle.
pub const SPEED_NEEDLE: Rgb565 = rgb(252, 227, 138);

/// Speed readout text.
pub const SPEED_TEXT: Rgb565 = rgb(0, 205, 172);

/// Speedometer zone colors, blended along the dial.
pub const ZONE_LOW: Rgb565 = rgb(0, 255, 0);
pub const ZONE_MID: Rgb565 = rgb(255, 255, 0);
pub const ZONE_HIGH: Rgb565 = rgb(255, 0, 0);

/// Battery dial ring and hub.
pub const BATTERY_RING: Rgb565 = rgb(255, 250, 205);

/// Battery needle.
pub const BATTERY_NEEDLE: Rgb565 = rgb(166, 192, 254);

/// Battery zones.
pub const BATTERY_EMPTY_ZONE: Rgb565 = RED;
pub const BATTERY_LOW_ZONE: Rgb565 = rgb(224, 210, 13);
pub const BATTERY_GOOD_ZONE: Rgb565 = rgb(66, 245, 66);

// =============================================================================
// Boot Screens and Popups
// =============================================================================

pub const START_BUTTON: Rgb565 = rgb(255, 80, 0);
pub const START_BUTTON_HOVER: Rgb565 = rgb(80, 255, 0);
pub const CREATOR_BUTTON: Rgb565 = rgb(153, 153, 0);
pub const CREATOR_PANEL: Rgb565 = rgb(77, 77, 0);
pub const CREATOR_TEXT: Rgb565 = rgb(204, 255, 255);

pub const GET_READY_TEXT: Rgb565 = rgb(207, 184, 29);
pub const PROGRESS_START: Rgb565 = rgb(240, 0, 0);
pub const PROGRESS_END: Rgb565 = rgb(255, 255, 0);
pub const PROGRESS_TRACK: Rgb565 = rgb(40, 8, 8);

pub const POPUP_BORDER: Rgb565 = WHITE;
pub const POPUP_FILL: Rgb565 = rgb(160, 0, 0);
