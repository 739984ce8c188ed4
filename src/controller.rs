//! Programmatic control of a running cluster.
//!
//! A [`Controller`] is a cloneable handle that any thread can use to drive
//! the dashboard the same way the keyboard does. Calls are queued as
//! [`Command`]s and applied by the render loop once per frame through
//! [`CommandQueue::drain_into`], so the cluster state is only ever touched
//! from one thread.

use std::sync::mpsc::{self, Receiver, Sender};

use cluster_common::{Cluster, Command, Side};

use crate::error::AppError;

/// Create a connected controller and queue.
pub fn channel() -> (Controller, CommandQueue) {
    let (tx, rx) = mpsc::channel();
    (Controller { tx }, CommandQueue { rx })
}

#[derive(Clone, Debug)]
pub struct Controller {
    tx: Sender<Command>,
}

impl Controller {
    pub fn send(&self, command: Command) -> Result<(), AppError> {
        self.tx.send(command).map_err(|_| AppError::ControllerDisconnected)
    }

    /// Change the top of the speedometer scale.
    pub fn set_speedometer_range(&self, top_speed: u32) -> Result<(), AppError> {
        self.send(Command::SetSpeedRange(top_speed))
    }

    pub fn apply_accelerator(&self) -> Result<(), AppError> { self.send(Command::ApplyAccelerator) }

    pub fn release_accelerator(&self) -> Result<(), AppError> { self.send(Command::ReleaseAccelerator) }

    /// Jump the needle to `speed_kmh`, clamped to the current range.
    pub fn set_speed(&self, speed_kmh: u32) -> Result<(), AppError> { self.send(Command::SetSpeed(speed_kmh)) }

    /// Whether the needle falls back to zero once the accelerator is released.
    pub fn set_auto_reset(&self, enabled: bool) -> Result<(), AppError> { self.send(Command::SetAutoReset(enabled)) }

    pub fn apply_brake(&self) -> Result<(), AppError> { self.send(Command::ApplyBrake) }

    pub fn release_brake(&self) -> Result<(), AppError> { self.send(Command::ReleaseBrake) }

    pub fn sound_horn(&self) -> Result<(), AppError> { self.send(Command::SoundHorn) }

    pub fn off_horn(&self) -> Result<(), AppError> { self.send(Command::OffHorn) }

    pub fn toggle_left_indicator(&self) -> Result<(), AppError> {
        self.send(Command::ToggleIndicator(Side::Left))
    }

    pub fn toggle_right_indicator(&self) -> Result<(), AppError> {
        self.send(Command::ToggleIndicator(Side::Right))
    }

    /// Set the battery level in percent. Values above 100 are clamped.
    pub fn update_battery(&self, percent: u8) -> Result<(), AppError> { self.send(Command::SetBattery(percent)) }

    pub fn charging_on(&self) -> Result<(), AppError> { self.send(Command::ChargingOn) }

    pub fn charging_off(&self) -> Result<(), AppError> { self.send(Command::ChargingOff) }
}

/// Receiving end of a [`Controller`].
#[derive(Debug)]
pub struct CommandQueue {
    rx: Receiver<Command>,
}

impl CommandQueue {
    /// Apply every pending command to `cluster`, returning how many ran.
    pub fn drain_into(&self, cluster: &mut Cluster) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.rx.try_recv() {
            log::debug!("Applying {command:?}");
            cluster.apply(command);
            applied += 1;
        }
        applied
    }
}
