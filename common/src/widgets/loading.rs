//! Loading screen: heading, rounded progress bar and a safety rule.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadii, Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;
use micromath::F32Ext;

use crate::animations::lerp_rgb565;
use crate::colors::{BLACK, GET_READY_TEXT, PROGRESS_END, PROGRESS_START, PROGRESS_TRACK, START_BUTTON, WHITE, YELLOW};
use crate::layout::Layout;
use crate::math::round;
use crate::screens::{GET_READY, LoadingScreen};
use crate::styles::CENTERED;

/// Position of the middle gradient stop along the bar.
const MID_STOP: f32 = 0.3;

fn progress_color(t: f32) -> Rgb565 {
    if t <= MID_STOP {
        lerp_rgb565(PROGRESS_START, START_BUTTON, t / MID_STOP)
    } else {
        lerp_rgb565(START_BUTTON, PROGRESS_END, (t - MID_STOP) / (1.0 - MID_STOP))
    }
}

/// Half-height of a capsule `width` wide and `2 * radius` tall at column `x`.
fn capsule_half_height(x: f32, width: f32, radius: f32) -> f32 {
    let dx = if x < radius {
        radius - x
    } else if x > width - radius {
        x - (width - radius)
    } else {
        0.0
    };
    if dx >= radius { 0.0 } else { F32Ext::sqrt(radius * radius - dx * dx).min(radius) }
}

/// Fill the first `fill` of `track` with the progress gradient, rounded at
/// both ends of the filled part.
fn draw_progress_fill<D>(display: &mut D, track: &Rectangle, fill: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = round(track.size.width as f32 * fill.clamp(0.0, 1.0));
    if width <= 0 {
        return;
    }
    let radius = track.size.height as f32 / 2.0;
    let radius = radius.min(width as f32 / 2.0);
    let center_y = track.top_left.y as f32 + track.size.height as f32 / 2.0;

    for column in 0..width {
        let half = capsule_half_height(column as f32 + 0.5, width as f32, radius);
        if half <= 0.0 {
            continue;
        }
        let x = track.top_left.x + column;
        let t = column as f32 / track.size.width as f32;
        Line::new(Point::new(x, round(center_y - half)), Point::new(x, round(center_y + half) - 1))
            .into_styled(PrimitiveStyle::with_stroke(progress_color(t), 1))
            .draw(display)
            .ok();
    }
}

/// Draw the loading screen showing safety `rule`.
pub fn draw_loading_screen<D>(display: &mut D, layout: &Layout, screen: &LoadingScreen, rule: &str)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    let fonts = layout.fonts();

    Text::with_text_style(GET_READY, layout.get_ready_text(), MonoTextStyle::new(fonts.title, GET_READY_TEXT), CENTERED)
        .draw(display)
        .ok();

    let track = layout.progress_bar();
    let radius = track.size.height / 2;
    RoundedRectangle::new(track, CornerRadii::new(Size::new(radius, radius)))
        .into_styled(PrimitiveStyle::with_fill(PROGRESS_TRACK))
        .draw(display)
        .ok();
    draw_progress_fill(display, &track, screen.fill());

    let mut value: String<8> = String::new();
    let _ = write!(value, "{}%", screen.value());
    Text::with_text_style(&value, track.center(), MonoTextStyle::new(fonts.title, WHITE), CENTERED)
        .draw(display)
        .ok();

    Text::with_text_style(rule, layout.rule_text(), MonoTextStyle::new(fonts.body, YELLOW), CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;
    use crate::screens::SAFETY_RULES;
    use crate::widgets::test_support::FrameBuffer;

    #[test]
    fn test_progress_gradient_stops() {
        assert_eq!(progress_color(0.0), PROGRESS_START);
        assert_eq!(progress_color(MID_STOP), START_BUTTON);
        assert_eq!(progress_color(1.0), PROGRESS_END);
    }

    #[test]
    fn test_capsule_is_rounded() {
        let mid = capsule_half_height(50.0, 100.0, 10.0);
        assert!(mid <= 10.0, "Fill must stay inside the track, got {mid}");
        assert!(mid > 9.5);
        assert_eq!(capsule_half_height(0.0, 100.0, 10.0), 0.0);
        let edge = capsule_half_height(2.0, 100.0, 10.0);
        assert!(edge > 0.0 && edge < 10.0);
    }

    #[test]
    fn test_fill_grows_with_progress() {
        let l = Layout::new(Size::new(640, 360));
        let track = l.progress_bar();
        let mut screen = LoadingScreen::new();

        let mut fb = FrameBuffer::new(640, 360);
        draw_loading_screen(&mut fb, &l, &screen, SAFETY_RULES[0]);
        let early = fb.count_in(track.top_left, track.size, PROGRESS_TRACK);

        screen.advance(Duration::from_millis(2000));
        draw_loading_screen(&mut fb, &l, &screen, SAFETY_RULES[0]);
        let late = fb.count_in(track.top_left, track.size, PROGRESS_TRACK);
        assert!(late < early, "More of the track should be covered later");
        let rule_band = Point::new(0, l.rule_text().y - 12);
        assert!(fb.count_in(rule_band, Size::new(640, 24), YELLOW) > 0, "Rule text should be drawn");
        assert!(fb.count(GET_READY_TEXT) > 0);
    }
}
