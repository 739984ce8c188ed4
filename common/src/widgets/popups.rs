//! Non-modal popup overlays for setting changes.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::cluster::Popup;
use crate::colors::{POPUP_BORDER, POPUP_FILL};
use crate::layout::Layout;
use crate::styles::{CENTERED, POPUP_STYLE};

const BORDER: u32 = 3;

const BORDER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(POPUP_BORDER);
const BACKGROUND_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(POPUP_FILL);

pub fn draw_popup<D>(display: &mut D, layout: &Layout, popup: &Popup)
where
    D: DrawTarget<Color = Rgb565>,
{
    let rect = layout.popup();
    Rectangle::new(rect.top_left - Point::new(BORDER as i32, BORDER as i32), rect.size + Size::new(2 * BORDER, 2 * BORDER))
        .into_styled(BORDER_FILL)
        .draw(display)
        .ok();
    rect.into_styled(BACKGROUND_FILL).draw(display).ok();

    let line_height = POPUP_STYLE.font.character_size.height as i32;
    let center = rect.center();
    let (first_at, second_at) = (center - Point::new(0, line_height / 2), center + Point::new(0, line_height / 2));

    match popup {
        Popup::AutoReset { enabled, .. } => {
            Text::with_text_style("AUTO RESET", first_at, POPUP_STYLE, CENTERED)
                .draw(display)
                .ok();
            let status = if *enabled { "ON" } else { "OFF" };
            Text::with_text_style(status, second_at, POPUP_STYLE, CENTERED)
                .draw(display)
                .ok();
        }
        Popup::Range { top, .. } => {
            Text::with_text_style("RANGE", first_at, POPUP_STYLE, CENTERED)
                .draw(display)
                .ok();
            let mut range: String<16> = String::new();
            let _ = write!(range, "0-{top} KM/H");
            Text::with_text_style(&range, second_at, POPUP_STYLE, CENTERED)
                .draw(display)
                .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;
    use crate::widgets::test_support::FrameBuffer;

    #[test]
    fn test_popup_is_bordered_and_centered() {
        let l = Layout::new(Size::new(640, 360));
        let mut fb = FrameBuffer::new(640, 360);
        draw_popup(&mut fb, &l, &Popup::Range { top: 240, age: Duration::ZERO });

        let rect = l.popup();
        assert_eq!(fb.pixel(rect.top_left.x - 1, rect.top_left.y - 1), Some(POPUP_BORDER));
        assert_eq!(fb.pixel(rect.top_left.x + 1, rect.top_left.y + 1), Some(POPUP_FILL));
        assert!(fb.count_in(rect.top_left, rect.size, POPUP_BORDER) > 0, "Text should be drawn inside");
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::BLACK));
    }
}
