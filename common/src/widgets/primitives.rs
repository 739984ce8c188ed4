//! Low-level drawing primitives shared across widgets.
//!
//! Angles are in degrees, clockwise on screen from +x (screen Y grows
//! downward). Arcs are drawn as short line segments so their angle
//! convention matches [`polar`] everywhere.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

use crate::animations::lerp_rgb565;
use crate::colors::{BG_DARK, BG_EDGE, BG_GLOW};
use crate::layout::Trapezoid;
use crate::math::{polar, round};

/// Target chord length of arc segments, in pixels.
const ARC_CHORD: f32 = 4.0;

/// Background gradient resolution.
const BACKGROUND_COLUMNS: u32 = 16;
const BACKGROUND_ROW_HEIGHT: u32 = 2;

// =============================================================================
// Fills
// =============================================================================

/// Fill a trapezoid row by row.
pub fn fill_trapezoid<D>(display: &mut D, shape: &Trapezoid, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    for y in shape.top..=shape.bottom {
        if let Some((left, right)) = shape.span_at(y) {
            Line::new(Point::new(left, y), Point::new(right, y))
                .into_styled(style)
                .draw(display)
                .ok();
        }
    }
}

/// Stroke a closed polygon through `points`.
pub fn stroke_polygon<D>(display: &mut D, points: &[Point], color: Rgb565, width: u32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, width);
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        Line::new(start, end).into_styled(style).draw(display).ok();
    }
}

/// Background color at diagonal position `t` (0.0 top-left, 1.0 bottom-right).
pub fn background_color(t: f32) -> Rgb565 {
    if t <= 0.2 {
        BG_DARK
    } else if t <= 0.5 {
        lerp_rgb565(BG_DARK, BG_GLOW, (t - 0.2) / 0.3)
    } else if t <= 0.7 {
        lerp_rgb565(BG_GLOW, BG_EDGE, (t - 0.5) / 0.2)
    } else {
        BG_EDGE
    }
}

/// Fill the whole target with the diagonal dark-red gradient.
pub fn draw_background<D>(display: &mut D, size: Size)
where
    D: DrawTarget<Color = Rgb565>,
{
    if size.width == 0 || size.height == 0 {
        return;
    }
    let column_width = size.width.div_ceil(BACKGROUND_COLUMNS);
    let mut y = 0;
    while y < size.height {
        for column in 0..BACKGROUND_COLUMNS {
            let x = column * column_width;
            if x >= size.width {
                break;
            }
            let t = ((x + column_width / 2) as f32 / size.width as f32 + y as f32 / size.height as f32) / 2.0;
            Rectangle::new(Point::new(x as i32, y as i32), Size::new(column_width, BACKGROUND_ROW_HEIGHT))
                .into_styled(PrimitiveStyle::with_fill(background_color(t)))
                .draw(display)
                .ok();
        }
        y += BACKGROUND_ROW_HEIGHT;
    }
}

// =============================================================================
// Dial Parts
// =============================================================================

/// Number of segments for an arc of `span` degrees at `radius`.
fn arc_segments(radius: f32, span: f32) -> u32 {
    let length = radius * span.to_radians();
    (round(length / ARC_CHORD).max(1)) as u32
}

/// Stroke an arc from `start` to `end` degrees, coloring each segment by its
/// position (0.0 at `start`, 1.0 at `end`).
#[allow(clippy::too_many_arguments)]
pub fn draw_arc_with<D, F>(display: &mut D, center: Point, radius: f32, start: f32, end: f32, width: u32, color_fn: F)
where
    D: DrawTarget<Color = Rgb565>,
    F: Fn(f32) -> Rgb565,
{
    let span = end - start;
    let segments = arc_segments(radius, span);
    let mut prev = polar(center, radius, start);
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let next = polar(center, radius, start + span * t);
        let mid = (i as f32 - 0.5) / segments as f32;
        Line::new(prev, next)
            .into_styled(PrimitiveStyle::with_stroke(color_fn(mid), width))
            .draw(display)
            .ok();
        prev = next;
    }
}

/// Stroke a single-color arc.
pub fn draw_arc<D>(display: &mut D, center: Point, radius: f32, start: f32, end: f32, width: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_arc_with(display, center, radius, start, end, width, |_| color);
}

/// Radial tick from `outer` to `inner` radius at `angle`.
pub fn draw_tick<D>(display: &mut D, center: Point, outer: f32, inner: f32, angle: f32, width: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(polar(center, outer, angle), polar(center, inner, angle))
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();
}

/// Triangular needle: base of `2 * half_width` across the center, tip at
/// `length` along `angle`.
pub fn draw_needle<D>(display: &mut D, center: Point, length: f32, half_width: f32, angle: f32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let tip = polar(center, length, angle);
    let half_width = half_width.max(1.0);
    let base_a = polar(center, half_width, angle + 90.0);
    let base_b = polar(center, half_width, angle - 90.0);
    Triangle::new(base_a, base_b, tip)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    Line::new(center, tip)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Filled round hub.
pub fn draw_hub<D>(display: &mut D, center: Point, diameter: f32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, round(diameter).max(1) as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}
