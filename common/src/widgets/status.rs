//! Horn icon and status words.
//!
//! Both only appear once the startup reveal is done. Their lamp colors come
//! from the cluster's color fades, so a lamp switching on glows in over a
//! few frames instead of snapping.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;
use micromath::F32Ext;

use super::primitives::stroke_polygon;
use crate::colors::{BLACK, HORN_BODY, HORN_EDGE};
use crate::layout::Layout;
use crate::math::round;
use crate::styles::TOP_LEFT;

// =============================================================================
// Horn
// =============================================================================

/// Horn outline in design units; the bounding box is x 40..100, y 30..100.
const HORN_SHAPE: [(f32, f32); 8] = [
    (40.0, 50.0),
    (60.0, 50.0),
    (90.0, 30.0),
    (100.0, 30.0),
    (100.0, 100.0),
    (90.0, 100.0),
    (60.0, 80.0),
    (40.0, 80.0),
];
const HORN_UNITS_X: (f32, f32) = (40.0, 60.0);
const HORN_UNITS_Y: (f32, f32) = (30.0, 70.0);

/// Sound waves as (size factor, right edge factor, half sweep degrees),
/// outermost first. Factors scale the horn's bounding box.
const SOUND_WAVES: [(f32, f32, f32); 3] = [(1.5, 1.7, 35.0), (1.3, 1.6, 27.5), (1.2, 1.5, 17.5)];

const SOUND_SEGMENTS: u32 = 12;

fn horn_point(bounds: &Rectangle, (x, y): (f32, f32)) -> Point {
    let w = bounds.size.width as f32;
    let h = bounds.size.height as f32;
    bounds.top_left
        + Point::new(
            round((x - HORN_UNITS_X.0) / HORN_UNITS_X.1 * w),
            round((y - HORN_UNITS_Y.0) / HORN_UNITS_Y.1 * h),
        )
}

/// Stroke part of an ellipse, symmetric about its +x axis.
fn draw_sound_wave<D>(display: &mut D, center: Point, rx: f32, ry: f32, half_sweep: f32, style: PrimitiveStyle<Rgb565>)
where
    D: DrawTarget<Color = Rgb565>,
{
    let at = |deg: f32| {
        let rad = deg.to_radians();
        center + Point::new(round(rx * F32Ext::cos(rad)), round(ry * F32Ext::sin(rad)))
    };
    let mut prev = at(-half_sweep);
    for i in 1..=SOUND_SEGMENTS {
        let next = at(-half_sweep + 2.0 * half_sweep * i as f32 / SOUND_SEGMENTS as f32);
        Line::new(prev, next).into_styled(style).draw(display).ok();
        prev = next;
    }
}

/// Draw the horn with its sound waves in `wave_color`.
pub fn draw_horn<D>(display: &mut D, layout: &Layout, wave_color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = layout.horn();
    let p = HORN_SHAPE.map(|unit| horn_point(&bounds, unit));
    let fill = PrimitiveStyle::with_fill(HORN_BODY);

    // Mouthpiece, flare, then the bell rim
    Rectangle::with_corners(p[0], p[6]).into_styled(fill).draw(display).ok();
    Triangle::new(p[1], p[2], p[5]).into_styled(fill).draw(display).ok();
    Triangle::new(p[1], p[5], p[6]).into_styled(fill).draw(display).ok();
    Rectangle::with_corners(p[2], p[4]).into_styled(fill).draw(display).ok();

    let edge = round(layout.w(0.0012)).max(1) as u32;
    stroke_polygon(display, &p, BLACK, edge);
    let right = bounds.top_left.x + bounds.size.width as i32 - 1;
    Line::new(Point::new(right, bounds.top_left.y), Point::new(right, bounds.top_left.y + bounds.size.height as i32 - 1))
        .into_styled(PrimitiveStyle::with_stroke(HORN_EDGE, edge))
        .draw(display)
        .ok();

    let wave_style = PrimitiveStyle::with_stroke(wave_color, round(layout.w(0.0025)).max(1) as u32);
    let (hw, hh) = (bounds.size.width as f32, bounds.size.height as f32);
    let center_y = bounds.center().y;
    for (size, right_edge, half_sweep) in SOUND_WAVES {
        let (rx, ry) = (hw * size / 2.0, hh * size / 2.0);
        let center = Point::new(bounds.top_left.x + round(hw * right_edge - rx), center_y);
        draw_sound_wave(display, center, rx, ry, half_sweep, wave_style);
    }
}

// =============================================================================
// Status Words
// =============================================================================

/// Draw CHARGING, BRAKE and ACCELERATE in their lamp colors.
pub fn draw_status_labels<D>(display: &mut D, layout: &Layout, charging: Rgb565, brake: Rgb565, accelerator: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let fonts = layout.fonts();
    let [charging_at, brake_at, accelerator_at] = layout.status_labels();

    Text::with_text_style("CHARGING", charging_at, MonoTextStyle::new(fonts.status, charging), TOP_LEFT)
        .draw(display)
        .ok();
    Text::with_text_style("BRAKE", brake_at, MonoTextStyle::new(fonts.readout, brake), TOP_LEFT)
        .draw(display)
        .ok();
    Text::with_text_style("ACCELERATE", accelerator_at, MonoTextStyle::new(fonts.status, accelerator), TOP_LEFT)
        .draw(display)
        .ok();
}
