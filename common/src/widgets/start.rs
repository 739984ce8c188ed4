//! Start screen: the round start button and the creator credits.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::Text;

use crate::colors::{
    BLACK,
    CREATOR_BUTTON,
    CREATOR_PANEL,
    CREATOR_TEXT,
    START_BUTTON,
    START_BUTTON_HOVER,
    WHITE,
};
use crate::layout::{Dial, Layout};
use crate::math::round;
use crate::screens::{CREATOR_INFO, StartScreen};
use crate::styles::CENTERED;

fn circle(dial: &Dial) -> Circle { Circle::with_center(dial.center, round(dial.diameter).max(1) as u32) }

pub fn draw_start_screen<D>(display: &mut D, layout: &Layout, screen: &StartScreen)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    let fonts = layout.fonts();

    let button = layout.start_button();
    let fill = if screen.is_hovered() { START_BUTTON_HOVER } else { START_BUTTON };
    circle(&button).into_styled(PrimitiveStyle::with_fill(fill)).draw(display).ok();
    Text::with_text_style("Start", button.center, MonoTextStyle::new(fonts.title, WHITE), CENTERED)
        .draw(display)
        .ok();

    if !screen.shows_creator_button() {
        return;
    }

    let creator = layout.creator_button();
    circle(&creator)
        .into_styled(PrimitiveStyle::with_stroke(CREATOR_BUTTON, layout.stroke()))
        .draw(display)
        .ok();
    Text::with_text_style("C", creator.center, MonoTextStyle::new(fonts.readout, CREATOR_BUTTON), CENTERED)
        .draw(display)
        .ok();

    if screen.panel() > 0.0 {
        let panel = layout.creator_panel(screen.panel());
        panel.into_styled(PrimitiveStyle::with_fill(CREATOR_PANEL)).draw(display).ok();

        let style = MonoTextStyle::new(fonts.body, CREATOR_TEXT);
        let line_height = fonts.body.character_size.height as i32;
        let center = panel.center();
        let [heading, credit] = CREATOR_INFO;
        Text::with_text_style(heading, center - Point::new(0, line_height / 2 + 1), style, CENTERED)
            .draw(display)
            .ok();
        Text::with_text_style(credit, center + Point::new(0, line_height / 2 + 1), style, CENTERED)
            .draw(display)
            .ok();
    }
}
