use std::thread;
use std::time::Instant;

use cluster_common::config::FRAME_TIME;
use cluster_common::layout::dial_contains;
use cluster_common::widgets::draw_start_screen;
use cluster_common::{BootOptions, Layout, StartScreen};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};

use crate::input::is_quit_key;

/// Run the start screen until the start button is clicked.
///
/// Hovering the button highlights it; clicking the creator button slides
/// the credits panel in or out.
pub fn run_start_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    layout: &Layout,
    options: BootOptions,
) -> bool {
    let mut screen = StartScreen::new(options);
    let button = layout.start_button();
    let creator = layout.creator_button();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return false,
                SimulatorEvent::KeyDown { keycode, .. } if is_quit_key(keycode) => return false,
                SimulatorEvent::MouseMove { point } => screen.set_hover(dial_contains(&button, point)),
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if dial_contains(&button, point) {
                        log::info!("Start pressed");
                        return true;
                    }
                    if screen.shows_creator_button() && dial_contains(&creator, point) {
                        screen.toggle_creator();
                    }
                }
                _ => {}
            }
        }

        screen.advance(frame_start - last);
        last = frame_start;

        draw_start_screen(display, layout, &screen);
        window.update(display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
