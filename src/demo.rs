//! Scripted demo drive.
//!
//! Runs on its own thread and drives the cluster through a [`Controller`]
//! like an external program would: speed follows a slow sine wave, the
//! battery drains and recharges, and the lamps cycle through a fixed
//! schedule. The thread ends when the cluster stops listening.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::controller::Controller;
use crate::error::AppError;

/// Time between demo updates.
const STEP: Duration = Duration::from_millis(100);

/// Demo updates per schedule cycle (12 seconds).
const CYCLE: u32 = 120;

/// Sinusoidal signal oscillating between `min` and `max`.
pub fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Battery level for demo step `step`: drains to 10%, then charges back.
fn battery_at(step: u32) -> u8 {
    let phase = step % 180;
    if phase < 90 { 100 - phase as u8 } else { 10 + (phase - 90) as u8 }
}

/// Run one demo step.
fn drive(controller: &Controller, step: u32, top_speed: u32) -> Result<(), AppError> {
    let t = step as f32 * STEP.as_secs_f32();
    let speed = fake_signal(t, 0.0, top_speed as f32 * 0.8, 0.4);
    controller.set_speed(speed as u32)?;

    if step % 5 == 0 {
        let battery = battery_at(step / 5);
        controller.update_battery(battery)?;
        if battery == 10 {
            controller.charging_on()?;
        } else if battery == 100 {
            controller.charging_off()?;
        }
    }

    match step % CYCLE {
        10 => controller.toggle_left_indicator()?,
        40 => controller.toggle_left_indicator()?,
        50 => controller.sound_horn()?,
        55 => controller.off_horn()?,
        70 => controller.toggle_right_indicator()?,
        100 => controller.toggle_right_indicator()?,
        105 => controller.apply_brake()?,
        115 => controller.release_brake()?,
        _ => {}
    }
    Ok(())
}

/// Start the demo thread.
///
/// The demo never touches the accelerator, so auto-reset is switched off
/// first to keep the needle where the script puts it.
pub fn spawn(controller: Controller, top_speed: u32) -> JoinHandle<Result<(), AppError>> {
    thread::spawn(move || {
        log::info!("Demo drive started");
        controller.set_auto_reset(false)?;

        let mut step: u32 = 0;
        loop {
            if let Err(err) = drive(&controller, step, top_speed) {
                log::info!("Demo drive stopped: {err}");
                return Ok(());
            }
            step = step.wrapping_add(1);
            thread::sleep(STEP);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::channel;

    #[test]
    fn test_fake_signal_stays_in_bounds() {
        for i in 0..200 {
            let v = fake_signal(i as f32 * 0.1, 10.0, 50.0, 0.7);
            assert!((10.0..=50.0).contains(&v), "Signal {v} out of bounds");
        }
        assert!((fake_signal(0.0, 0.0, 100.0, 1.0) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_battery_drains_then_charges() {
        assert_eq!(battery_at(0), 100);
        assert_eq!(battery_at(89), 11);
        assert_eq!(battery_at(90), 10);
        assert_eq!(battery_at(179), 99);
        assert_eq!(battery_at(180), 100);
    }

    #[test]
    fn test_drive_stops_when_disconnected() {
        let (controller, queue) = channel();
        drop(queue);
        assert!(drive(&controller, 0, 200).is_err());
    }
}
