//! Turn indicator arrows.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};

use super::primitives::stroke_polygon;
use crate::animations::lerp_rgb565;
use crate::colors::{BLACK, INDICATOR_OFF, INDICATOR_ON};
use crate::indicator::Side;
use crate::layout::Layout;
use crate::math::round;

/// Arrow head width as a fraction of the arrow width.
const HEAD: f32 = 50.0 / 110.0;
/// Arrow body top and bottom as fractions of the arrow height.
const BODY_TOP: f32 = 0.25;
const BODY_BOTTOM: f32 = 0.75;

const FILL_SHADE: f32 = 0.35;

/// Map a normalized arrow point (tip at x = 0) into `bounds`.
fn to_bounds(bounds: &Rectangle, side: Side, x: f32, y: f32) -> Point {
    let w = bounds.size.width as f32;
    let h = bounds.size.height as f32;
    let x = match side {
        Side::Left => x,
        Side::Right => 1.0 - x,
    };
    bounds.top_left + Point::new(round(x * w), round(y * h))
}

/// Draw one indicator arrow at startup progress `slide`.
pub fn draw_indicator<D>(display: &mut D, layout: &Layout, side: Side, slide: f32, lit: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = layout.indicator(side, slide);
    let color = if lit { INDICATOR_ON } else { INDICATOR_OFF };
    let fill = PrimitiveStyle::with_fill(lerp_rgb565(color, BLACK, FILL_SHADE));
    let p = |x: f32, y: f32| to_bounds(&bounds, side, x, y);

    Triangle::new(p(0.0, 0.5), p(HEAD, 0.0), p(HEAD, 1.0))
        .into_styled(fill)
        .draw(display)
        .ok();
    Rectangle::with_corners(p(HEAD, BODY_TOP), p(1.0, BODY_BOTTOM))
        .into_styled(fill)
        .draw(display)
        .ok();

    let outline = [
        p(0.0, 0.5),
        p(HEAD, 0.0),
        p(HEAD, BODY_TOP),
        p(1.0, BODY_TOP),
        p(1.0, BODY_BOTTOM),
        p(HEAD, BODY_BOTTOM),
        p(HEAD, 1.0),
    ];
    stroke_polygon(display, &outline, color, layout.stroke());
}
