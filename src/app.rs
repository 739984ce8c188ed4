//! Simulator window and the dashboard render loop.

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use chrono::Local;
use cluster_common::colors::BLACK;
use cluster_common::config::FRAME_TIME;
use cluster_common::{Cluster, Layout, Screen, draw_dashboard, key_commands};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

use crate::config::LaunchOptions;
use crate::controller::CommandQueue;
use crate::error::AppError;
use crate::input::{is_quit_key, key_for};
use crate::screens::{run_loading_screen, run_start_screen};

const WINDOW_TITLE: &str = "EV Cluster";

/// Header clock format, e.g. `09:41:00AM Tue 16`.
const CLOCK_FORMAT: &str = "%I:%M:%S%p %a %d";

/// Open the window, run the boot screens and then the dashboard until the
/// window is closed.
///
/// Commands sent through the [`Controller`](crate::controller::Controller)
/// paired with `queue` are applied once per dashboard frame.
pub fn run(options: LaunchOptions, queue: &CommandQueue) -> Result<(), AppError> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(options.size);
    let output_settings = OutputSettingsBuilder::new().scale(options.scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);
    let layout = Layout::new(options.size);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut screen = Screen::first(options.boot);
    while screen != Screen::Dashboard {
        log::info!("Showing {screen:?} screen");
        let completed = match screen {
            Screen::Start => run_start_screen(&mut display, &mut window, &layout, options.boot),
            Screen::Loading => run_loading_screen(&mut display, &mut window, &layout),
            Screen::Dashboard => true,
        };
        if !completed {
            log::info!("Window closed during boot");
            return Ok(());
        }
        screen = screen.next(options.boot);
    }

    let mut cluster = Cluster::new(options.settings);
    cluster.start_up();
    log::info!("Dashboard started: {:?}", options.settings);

    run_dashboard(&mut display, &mut window, &layout, &mut cluster, queue);
    Ok(())
}

fn apply_key(cluster: &mut Cluster, keycode: embedded_graphics_simulator::sdl2::Keycode, pressed: bool) {
    if let Some(key) = key_for(keycode) {
        for command in key_commands(key, pressed) {
            log::debug!("{key:?} {} -> {command:?}", if pressed { "down" } else { "up" });
            cluster.apply(command);
        }
    }
}

fn run_dashboard(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    layout: &Layout,
    cluster: &mut Cluster,
    queue: &CommandQueue,
) {
    let mut last = Instant::now();
    let mut clock: String<32> = String::new();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Held keys repeat; the cluster only wants edges
                    if repeat {
                        continue;
                    }
                    if is_quit_key(keycode) {
                        return;
                    }
                    apply_key(cluster, keycode, true);
                }
                SimulatorEvent::KeyUp { keycode, repeat, .. } if !repeat => apply_key(cluster, keycode, false),
                _ => {}
            }
        }

        queue.drain_into(cluster);
        cluster.advance(frame_start - last);
        last = frame_start;

        clock.clear();
        let _ = write!(clock, "{}", Local::now().format(CLOCK_FORMAT));

        draw_dashboard(display, layout, cluster, Some(&clock));
        window.update(display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
