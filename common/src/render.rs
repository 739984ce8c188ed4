//! Full-frame dashboard rendering.
//!
//! The dashboard repaints every element each frame, background first.
//!
//! # Draw Order
//!
//! | Layer | Widget | Shown |
//! |-------|--------|-------|
//! | 1 | Background gradient | Always |
//! | 2 | Header band and clock | Once it starts dropping in |
//! | 3 | Indicator arrows | Once they start sliding in |
//! | 4 | Horn and status words | After the reveal |
//! | 5 | Speedometer | Once it starts rising |
//! | 6 | Battery dial (redraws the speedometer ring) | With the speedometer |
//! | 7 | Popup | While one is active |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::animations::lamp_idx;
use crate::cluster::Cluster;
use crate::indicator::Side;
use crate::layout::Layout;
use crate::widgets::{
    draw_background,
    draw_battery,
    draw_header,
    draw_horn,
    draw_indicator,
    draw_popup,
    draw_speedometer,
    draw_status_labels,
};

/// Draw one dashboard frame.
///
/// `clock` is the formatted time for the header; it is only shown once the
/// startup sequence reaches the clock step.
pub fn draw_dashboard<D>(display: &mut D, layout: &Layout, cluster: &Cluster, clock: Option<&str>)
where
    D: DrawTarget<Color = Rgb565>,
{
    let frame = cluster.frame();
    let lamps = cluster.lamps();

    draw_background(display, layout.size());

    let clock = if frame.clock_visible { clock } else { None };
    draw_header(display, layout, frame.header_drop, cluster.lamp_color(lamp_idx::HEADER), clock);

    draw_indicator(display, layout, Side::Left, frame.indicator_slide, lamps.left_indicator);
    draw_indicator(display, layout, Side::Right, frame.indicator_slide, lamps.right_indicator);

    if frame.status_visible {
        draw_horn(display, layout, cluster.lamp_color(lamp_idx::HORN));
        draw_status_labels(
            display,
            layout,
            cluster.lamp_color(lamp_idx::CHARGING),
            cluster.lamp_color(lamp_idx::BRAKE),
            cluster.lamp_color(lamp_idx::ACCELERATOR),
        );
    }

    draw_speedometer(display, layout, frame.gauge_rise, cluster.gauge());
    draw_battery(display, layout, frame.gauge_rise, cluster.gauge());

    if let Some(popup) = cluster.popup() {
        draw_popup(display, layout, &popup);
    }
}
