//! Battery dial.
//!
//! A smaller dial tucked against the speedometer's lower right. The scale
//! reads 100 at the top left down to 0 at the lower right, with colored
//! zones for empty, low and good charge.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::{draw_arc, draw_hub, draw_needle, draw_tick};
use super::speedometer::draw_ring;
use crate::colors::{
    BATTERY_EMPTY_ZONE,
    BATTERY_GOOD_ZONE,
    BATTERY_LOW_ZONE,
    BATTERY_NEEDLE,
    BATTERY_RING,
    DIAL_TICK,
};
use crate::config::BATTERY_EMPTY_DEG;
use crate::gauge::{BatteryZone, GaugeState, battery_angle};
use crate::layout::Layout;
use crate::math::{polar, round};
use crate::styles::{BOTTOM_LEFT, CENTERED};

/// Gap left at each end of a zone arc.
const ZONE_INSET_DEG: f32 = 1.0;

/// Outer ring span, ending at the empty mark.
const RING_START_DEG: f32 = BATTERY_EMPTY_DEG - 190.0;

/// First tick angle; ticks follow every 18 degrees.
const TICK_START_DEG: f32 = 237.0;
const TICK_STEP_DEG: f32 = 18.0;
const TICK_COUNT: u32 = 11;

// Radii as fractions of the dial diameter.
const TICK_OUTER: f32 = 0.495;
const TICK_INNER: f32 = 0.45;
const ZONE_RADIUS: f32 = 0.4875;

const NEEDLE_LENGTH: f32 = 0.22;
const NEEDLE_HALF_WIDTH: f32 = 0.0045;
const HUB_DIAMETER: f32 = 0.02;

const fn zone_color(zone: BatteryZone) -> Rgb565 {
    match zone {
        BatteryZone::Empty => BATTERY_EMPTY_ZONE,
        BatteryZone::Low => BATTERY_LOW_ZONE,
        BatteryZone::Good => BATTERY_GOOD_ZONE,
    }
}

/// Screen angles `(start, end)` of a zone arc. The scale runs backwards, so
/// the arc starts at the zone's upper charge bound.
fn zone_span(zone: BatteryZone) -> (f32, f32) {
    let (from, to) = zone.percent_range();
    (battery_angle(f32::from(to)) + ZONE_INSET_DEG, battery_angle(f32::from(from)) - ZONE_INSET_DEG)
}

/// Draw the battery dial at startup progress `rise`, then redraw the
/// speedometer ring over the overlap.
pub fn draw_battery<D>(display: &mut D, layout: &Layout, rise: f32, gauge: &GaugeState)
where
    D: DrawTarget<Color = Rgb565>,
{
    let dial = layout.battery(rise);
    if dial.top() >= layout.size().height as i32 {
        return;
    }
    let bw = dial.diameter;
    let fonts = layout.fonts();
    let width = layout.stroke();
    let zone_width = round(layout.w(0.01)).max(1) as u32;

    for zone in BatteryZone::ALL {
        let (start, end) = zone_span(zone);
        draw_arc(display, dial.center, bw * ZONE_RADIUS, start, end, zone_width, zone_color(zone));
    }

    let label_style = MonoTextStyle::new(fonts.tick_major, DIAL_TICK);
    let label_radius = bw * TICK_INNER - layout.w(0.02);
    for index in 0..TICK_COUNT {
        let angle = TICK_START_DEG + index as f32 * TICK_STEP_DEG;
        draw_tick(display, dial.center, bw * TICK_OUTER, bw * TICK_INNER, angle, width, DIAL_TICK);

        let mut label: String<4> = String::new();
        let _ = write!(label, "{}", 100 - index * 10);
        Text::with_text_style(&label, polar(dial.center, label_radius, angle), label_style, CENTERED)
            .draw(display)
            .ok();
    }

    draw_needle(
        display,
        dial.center,
        layout.h(NEEDLE_LENGTH),
        layout.h(NEEDLE_HALF_WIDTH),
        gauge.battery_needle_angle(),
        BATTERY_NEEDLE,
    );
    draw_hub(display, dial.center, layout.w(HUB_DIAMETER), BATTERY_RING);

    let ring_radius = dial.radius() - width as f32 / 2.0;
    draw_arc(display, dial.center, ring_radius, RING_START_DEG, BATTERY_EMPTY_DEG, width, BATTERY_RING);
    draw_ring(display, layout, &layout.speedometer(rise));

    // Readout
    let style = MonoTextStyle::new(fonts.readout, BATTERY_RING);
    let left = dial.center.x as f32 - dial.radius();
    let percent_at = Point::new(round(left + bw * 0.23), dial.bottom());
    let mut percent: String<8> = String::new();
    let _ = write!(percent, "{}%", gauge.battery());
    Text::with_text_style(&percent, percent_at, style, BOTTOM_LEFT)
        .draw(display)
        .ok();
    let caption_at = Point::new(round(left + bw * 0.15), dial.bottom() - fonts.readout.character_size.height as i32);
    Text::with_text_style("BATTERY", caption_at, style, BOTTOM_LEFT)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLACK;
    use crate::widgets::test_support::FrameBuffer;

    fn layout() -> Layout { Layout::new(Size::new(640, 360)) }

    #[test]
    fn test_scale_runs_full_to_empty() {
        assert_eq!(battery_angle(100.0), TICK_START_DEG, "Full charge should sit on the first tick");
        let last = TICK_START_DEG + (TICK_COUNT - 1) as f32 * TICK_STEP_DEG;
        assert_eq!(battery_angle(0.0), last, "Empty should sit on the last tick");
        assert_eq!(last, BATTERY_EMPTY_DEG);
    }

    #[test]
    fn test_zone_spans_follow_scale() {
        let close = |(a, b): (f32, f32), (x, y): (f32, f32)| (a - x).abs() < 1e-3 && (b - y).abs() < 1e-3;
        assert!(close(zone_span(BatteryZone::Empty), (382.0, 416.0)));
        assert!(close(zone_span(BatteryZone::Low), (346.0, 380.0)));
        assert!(close(zone_span(BatteryZone::Good), (238.0, 344.0)));
    }

    #[test]
    fn test_zones_and_needle_drawn() {
        let l = layout();
        let dial = l.battery(1.0);
        let mut gauge = GaugeState::new();
        gauge.set_battery(50);

        let mut fb = FrameBuffer::new(640, 360);
        draw_battery(&mut fb, &l, 1.0, &gauge);
        assert!(fb.count(BATTERY_EMPTY_ZONE) > 0);
        assert!(fb.count(BATTERY_LOW_ZONE) > 0);
        assert!(fb.count(BATTERY_GOOD_ZONE) > 0);

        // 50% points at 327 degrees, up and to the right
        let tip = polar(dial.center, l.h(NEEDLE_LENGTH) - 2.0, gauge.battery_needle_angle());
        assert_eq!(fb.pixel(tip.x, tip.y), Some(BATTERY_NEEDLE));
        assert!(tip.x > dial.center.x && tip.y < dial.center.y);
    }

    #[test]
    fn test_hidden_battery_draws_nothing() {
        let l = layout();
        let mut fb = FrameBuffer::new(640, 360);
        draw_battery(&mut fb, &l, 0.0, &GaugeState::new());
        assert_eq!(fb.count(BLACK), 640 * 360);
    }
}
