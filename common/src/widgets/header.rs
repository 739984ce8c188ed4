//! Header band with the clock pocket.
//!
//! The band is a wide trapezoid hanging from the top edge with a narrower
//! trapezoid "pocket" cut into it. The band color follows the header lamp
//! (normal or brake alert); the clock sits in the pocket.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use super::primitives::{fill_trapezoid, stroke_polygon};
use crate::animations::lerp_rgb565;
use crate::colors::{BLACK, CLOCK_TEXT, HEADER_OUTLINE, HEADER_POCKET};
use crate::layout::{HeaderGeometry, Layout};
use crate::styles::CENTERED;

/// How far the band fill is darkened towards black.
const FILL_SHADE: f32 = 0.5;

/// Band outline running around the outer edge and into the pocket.
fn outline(header: &HeaderGeometry) -> [Point; 8] {
    let (outer, pocket) = (&header.outer, &header.pocket);
    [
        Point::new(outer.top_left, outer.top),
        Point::new(pocket.top_left, pocket.top),
        Point::new(pocket.bottom_left, pocket.bottom),
        Point::new(pocket.bottom_right, pocket.bottom),
        Point::new(pocket.top_right, pocket.top),
        Point::new(outer.top_right, outer.top),
        Point::new(outer.bottom_right, outer.bottom),
        Point::new(outer.bottom_left, outer.bottom),
    ]
}

/// Draw the header band at startup progress `drop`, in `color`.
///
/// `clock` is the preformatted time, or `None` while the clock is hidden.
pub fn draw_header<D>(display: &mut D, layout: &Layout, drop: f32, color: Rgb565, clock: Option<&str>)
where
    D: DrawTarget<Color = Rgb565>,
{
    let header = layout.header(drop);
    if header.outer.bottom <= 0 {
        return;
    }

    fill_trapezoid(display, &header.outer, lerp_rgb565(color, BLACK, FILL_SHADE));
    fill_trapezoid(display, &header.pocket, HEADER_POCKET);
    stroke_polygon(display, &outline(&header), HEADER_OUTLINE, layout.stroke());

    if let Some(clock) = clock {
        let style = MonoTextStyle::new(layout.fonts().clock, CLOCK_TEXT);
        Text::with_text_style(clock, header.pocket.center(), style, CENTERED)
            .draw(display)
            .ok();
    }
}
