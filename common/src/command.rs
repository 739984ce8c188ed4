//! External state-change calls and the default keyboard binding.
//!
//! Every way of driving the cluster (the control handle, the demo driver,
//! the keyboard) goes through [`Command`], so [`Cluster::apply`] is the one
//! place gauge state changes from outside.
//!
//! [`Cluster::apply`]: crate::cluster::Cluster::apply

use heapless::Vec;

use crate::indicator::Side;

/// One external state-change call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Change the speedometer's top speed (normalized by [`SpeedRange`](crate::gauge::SpeedRange)).
    SetSpeedRange(u32),
    ApplyAccelerator,
    ReleaseAccelerator,
    /// Jump the needle to a speed in km/h.
    SetSpeed(u32),
    /// Enable or disable the speed decay.
    SetAutoReset(bool),
    ApplyBrake,
    ReleaseBrake,
    SoundHorn,
    OffHorn,
    /// Flip one turn indicator on or off.
    ToggleIndicator(Side),
    /// Set the battery charge in percent.
    SetBattery(u8),
    ChargingOn,
    ChargingOff,
}

// =============================================================================
// Keyboard Binding
// =============================================================================

/// Keys with a default binding.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    /// Accelerator while held.
    W,
    /// Brake while held.
    Space,
    /// Horn while held.
    H,
    /// Toggle left indicator.
    Left,
    /// Toggle right indicator.
    Right,
    /// Disable speed decay.
    R,
    /// Enable speed decay.
    F,
    /// Demo burst: speed 150, battery 70, charging on.
    C,
}

/// Most commands a single key event produces.
pub const MAX_KEY_COMMANDS: usize = 3;

/// Commands for one key press (`pressed = true`) or release.
///
/// Held keys (W, Space, H) produce a command on both edges; toggles and
/// one-shot keys act on press only.
pub fn key_commands(key: Key, pressed: bool) -> Vec<Command, MAX_KEY_COMMANDS> {
    let mut commands: Vec<Command, MAX_KEY_COMMANDS> = Vec::new();
    let mut push = |command: Command| {
        commands.push(command).ok();
    };

    match (key, pressed) {
        (Key::W, true) => push(Command::ApplyAccelerator),
        (Key::W, false) => push(Command::ReleaseAccelerator),
        (Key::Space, true) => push(Command::ApplyBrake),
        (Key::Space, false) => push(Command::ReleaseBrake),
        (Key::H, true) => push(Command::SoundHorn),
        (Key::H, false) => push(Command::OffHorn),
        (Key::Left, true) => push(Command::ToggleIndicator(Side::Left)),
        (Key::Right, true) => push(Command::ToggleIndicator(Side::Right)),
        (Key::R, true) => push(Command::SetAutoReset(false)),
        (Key::F, true) => push(Command::SetAutoReset(true)),
        (Key::C, true) => {
            push(Command::SetSpeed(150));
            push(Command::SetBattery(70));
            push(Command::ChargingOn);
        }
        _ => {}
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_act_on_both_edges() {
        assert_eq!(key_commands(Key::W, true).as_slice(), &[Command::ApplyAccelerator]);
        assert_eq!(key_commands(Key::W, false).as_slice(), &[Command::ReleaseAccelerator]);
        assert_eq!(key_commands(Key::Space, true).as_slice(), &[Command::ApplyBrake]);
        assert_eq!(key_commands(Key::Space, false).as_slice(), &[Command::ReleaseBrake]);
        assert_eq!(key_commands(Key::H, true).as_slice(), &[Command::SoundHorn]);
        assert_eq!(key_commands(Key::H, false).as_slice(), &[Command::OffHorn]);
    }

    #[test]
    fn test_toggles_act_on_press_only() {
        assert_eq!(key_commands(Key::Left, true).as_slice(), &[Command::ToggleIndicator(Side::Left)]);
        assert!(key_commands(Key::Left, false).is_empty());
        assert_eq!(key_commands(Key::Right, true).as_slice(), &[Command::ToggleIndicator(Side::Right)]);
        assert!(key_commands(Key::Right, false).is_empty());
    }

    #[test]
    fn test_auto_reset_keys() {
        assert_eq!(key_commands(Key::R, true).as_slice(), &[Command::SetAutoReset(false)]);
        assert_eq!(key_commands(Key::F, true).as_slice(), &[Command::SetAutoReset(true)]);
        assert!(key_commands(Key::F, false).is_empty());
    }

    #[test]
    fn test_demo_burst() {
        assert_eq!(
            key_commands(Key::C, true).as_slice(),
            &[Command::SetSpeed(150), Command::SetBattery(70), Command::ChargingOn]
        );
    }
}
