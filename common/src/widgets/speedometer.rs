//! Speedometer dial.
//!
//! The dial sweeps 300 degrees clockwise from the lower left. Tick labels
//! follow the active [`SpeedRange`](crate::gauge::SpeedRange): a major tick
//! every 20 km/h and a minor tick halfway between, with minor labels only
//! on ranges narrow enough to fit them.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::{draw_arc, draw_arc_with, draw_hub, draw_needle, draw_tick};
use crate::animations::gradient3;
use crate::colors::{DIAL_RING, DIAL_TICK, SPEED_NEEDLE, SPEED_TEXT, ZONE_HIGH, ZONE_LOW, ZONE_MID};
use crate::config::{NEEDLE_SWEEP_DEG, SPEED_ZERO_DEG};
use crate::gauge::GaugeState;
use crate::layout::{Dial, Layout};
use crate::math::polar;
use crate::styles::{BOTTOM_CENTER, CENTERED};

// Radii as fractions of the dial diameter.
const MAJOR_INNER: f32 = 0.45;
const MINOR_INNER: f32 = 0.47;
const ZONE_RADIUS: f32 = 0.4875;

/// Label inset from the major tick ends, as a fraction of window width.
const LABEL_INSET: f32 = 0.02;

const NEEDLE_LENGTH: f32 = 0.28;
const NEEDLE_HALF_WIDTH: f32 = 0.0055;
const HUB_DIAMETER: f32 = 0.03;

/// Outer ring, shared with the battery dial which redraws it on top.
pub(super) fn draw_ring<D>(display: &mut D, layout: &Layout, dial: &Dial)
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = layout.stroke();
    let radius = dial.radius() - width as f32 / 2.0;
    draw_arc(display, dial.center, radius, SPEED_ZERO_DEG, SPEED_ZERO_DEG + NEEDLE_SWEEP_DEG, width, DIAL_RING);
}

fn draw_label<D>(display: &mut D, dial: &Dial, radius: f32, angle: f32, value: u32, style: MonoTextStyle<'_, Rgb565>)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut label: String<8> = String::new();
    let _ = write!(label, "{value}");
    Text::with_text_style(&label, polar(dial.center, radius, angle), style, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the speedometer at startup progress `rise`.
pub fn draw_speedometer<D>(display: &mut D, layout: &Layout, rise: f32, gauge: &GaugeState)
where
    D: DrawTarget<Color = Rgb565>,
{
    let dial = layout.speedometer(rise);
    if dial.top() >= layout.size().height as i32 {
        return;
    }
    let range = gauge.range();
    let d = dial.diameter;
    let width = layout.stroke();
    let fonts = layout.fonts();

    draw_ring(display, layout, &dial);
    let (zone_start, zone_end) = (SPEED_ZERO_DEG + 1.0, SPEED_ZERO_DEG + NEEDLE_SWEEP_DEG - 1.0);
    draw_arc_with(display, dial.center, d * ZONE_RADIUS, zone_start, zone_end, width, |t| {
        gradient3(ZONE_LOW, ZONE_MID, ZONE_HIGH, t)
    });

    // =========================================================================
    // Ticks
    // =========================================================================

    let major_style = MonoTextStyle::new(fonts.tick_major, DIAL_TICK);
    let label_radius = d * MAJOR_INNER - layout.w(LABEL_INSET);
    for index in 0..range.major_count() {
        let angle = range.major_angle(index);
        draw_tick(display, dial.center, dial.radius(), d * MAJOR_INNER, angle, width, DIAL_TICK);
        draw_label(display, &dial, label_radius, angle, range.major_label(index), major_style);
    }

    let minor_style = MonoTextStyle::new(fonts.tick_minor, DIAL_TICK);
    for index in 0..range.minor_count() {
        let angle = range.minor_angle(index);
        draw_tick(display, dial.center, dial.radius(), d * MINOR_INNER, angle, 1, DIAL_TICK);
        if range.shows_minor_labels() {
            draw_label(display, &dial, label_radius, angle, range.minor_label(index), minor_style);
        }
    }

    // =========================================================================
    // Readout
    // =========================================================================

    let readout_style = MonoTextStyle::new(fonts.readout, SPEED_TEXT);
    let caption_style = MonoTextStyle::new(fonts.status, SPEED_TEXT);
    let bottom = Point::new(dial.center.x, dial.bottom() - width as i32);
    let mut readout: String<16> = String::new();
    let _ = write!(readout, "{} km/h", gauge.speed_kmh());
    Text::with_text_style(&readout, bottom, readout_style, BOTTOM_CENTER)
        .draw(display)
        .ok();
    let caption = bottom - Point::new(0, fonts.readout.character_size.height as i32);
    Text::with_text_style("SPEED", caption, caption_style, BOTTOM_CENTER)
        .draw(display)
        .ok();

    draw_needle(
        display,
        dial.center,
        layout.h(NEEDLE_LENGTH),
        layout.h(NEEDLE_HALF_WIDTH),
        gauge.speed_needle_angle(),
        SPEED_NEEDLE,
    );
    draw_hub(display, dial.center, layout.w(HUB_DIAMETER), DIAL_RING);
}
