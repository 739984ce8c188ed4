use std::thread;
use std::time::Instant;

use cluster_common::config::FRAME_TIME;
use cluster_common::screens::SAFETY_RULES;
use cluster_common::widgets::draw_loading_screen;
use cluster_common::{Layout, LoadingEvent, LoadingScreen};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use rand::seq::SliceRandom;

use crate::input::is_quit_key;

fn pick_rule(rng: &mut impl rand::Rng) -> &'static str { SAFETY_RULES.choose(rng).copied().unwrap_or(SAFETY_RULES[0]) }

/// Run the loading bar to 100%, showing a random safety rule that changes
/// every few seconds.
pub fn run_loading_screen(display: &mut SimulatorDisplay<Rgb565>, window: &mut Window, layout: &Layout) -> bool {
    let mut rng = rand::thread_rng();
    let mut screen = LoadingScreen::new();
    let mut rule = pick_rule(&mut rng);
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return false,
                SimulatorEvent::KeyDown { keycode, .. } if is_quit_key(keycode) => return false,
                _ => {}
            }
        }

        let mut finished = false;
        for event in screen.advance(frame_start - last) {
            match event {
                LoadingEvent::ChangeRule => rule = pick_rule(&mut rng),
                LoadingEvent::Finished => finished = true,
            }
        }
        last = frame_start;

        draw_loading_screen(display, layout, &screen, rule);
        window.update(display);

        if finished {
            log::info!("Loading finished");
            return true;
        }

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
