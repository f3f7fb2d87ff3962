use winit::event::VirtualKeyCode;
use winit_input_helper::WinitInputHelper;

use crate::grid::Dir;

const STEER_KEYS: [VirtualKeyCode; 8] = [
    VirtualKeyCode::Up,
    VirtualKeyCode::W,
    VirtualKeyCode::Down,
    VirtualKeyCode::S,
    VirtualKeyCode::Left,
    VirtualKeyCode::A,
    VirtualKeyCode::Right,
    VirtualKeyCode::D,
];

pub fn dir_for_key(key: VirtualKeyCode) -> Option<Dir> {
    match key {
        VirtualKeyCode::Up | VirtualKeyCode::W => Some(Dir::Up),
        VirtualKeyCode::Down | VirtualKeyCode::S => Some(Dir::Down),
        VirtualKeyCode::Left | VirtualKeyCode::A => Some(Dir::Left),
        VirtualKeyCode::Right | VirtualKeyCode::D => Some(Dir::Right),
        _ => None,
    }
}

/// Direction of a steering key pressed since the last update. If several were
/// pressed, the last one in `STEER_KEYS` order wins.
pub fn pressed_dir(input: &WinitInputHelper) -> Option<Dir> {
    STEER_KEYS
        .iter()
        .filter(|&&key| input.key_pressed(key))
        .filter_map(|&key| dir_for_key(key))
        .last()
}

pub fn quit_requested(input: &WinitInputHelper) -> bool {
    input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() || input.destroyed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(dir_for_key(VirtualKeyCode::Up), Some(Dir::Up));
        assert_eq!(dir_for_key(VirtualKeyCode::S), Some(Dir::Down));
        assert_eq!(dir_for_key(VirtualKeyCode::Left), Some(Dir::Left));
        assert_eq!(dir_for_key(VirtualKeyCode::D), Some(Dir::Right));
        assert_eq!(dir_for_key(VirtualKeyCode::Space), None);
    }

    #[test]
    fn every_steer_key_maps_to_a_direction() {
        for key in STEER_KEYS {
            assert!(dir_for_key(key).is_some());
        }
    }

    #[test]
    fn idle_input_does_nothing() {
        let input = WinitInputHelper::new();
        assert_eq!(pressed_dir(&input), None);
        assert!(!quit_requested(&input));
    }
}
