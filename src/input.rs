//! Simulator keyboard mapping.

use cluster_common::Key;
use embedded_graphics_simulator::sdl2::Keycode;

/// Cluster key bound to `keycode`, if any.
pub fn key_for(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::W => Some(Key::W),
        Keycode::Space => Some(Key::Space),
        Keycode::H => Some(Key::H),
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::R => Some(Key::R),
        Keycode::F => Some(Key::F),
        Keycode::C => Some(Key::C),
        _ => None,
    }
}

/// Escape closes the window from any screen.
pub fn is_quit_key(keycode: Keycode) -> bool { keycode == Keycode::Escape }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_keys() {
        assert_eq!(key_for(Keycode::W), Some(Key::W));
        assert_eq!(key_for(Keycode::Space), Some(Key::Space));
        assert_eq!(key_for(Keycode::Left), Some(Key::Left));
        assert_eq!(key_for(Keycode::Q), None);
        assert!(is_quit_key(Keycode::Escape));
        assert!(!is_quit_key(Keycode::W));
    }
}
