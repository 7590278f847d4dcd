use roomview_common::Direction;
use winit::keyboard::KeyCode;

/// A high-level action produced from raw keyboard input.
///
/// The viewer consumes actions, never raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the camera while the key is held.
    Move(Direction),
    /// Close the window and leave the render loop.
    Quit,
    /// Raise the lamp-orbit flag. The flag has no effect on rendering.
    StartLampOrbit,
    /// Lower the lamp-orbit flag.
    StopLampOrbit,
    /// Show or hide the camera overlay.
    ToggleHud,
}

impl Action {
    /// Continuous actions are applied every frame while their key is down.
    pub fn is_continuous(self) -> bool {
        matches!(self, Action::Move(_))
    }
}

/// Fixed key map: WASD planar movement, Q/E vertical movement, Escape quits,
/// L/K drive the orbit flag, F1 toggles the overlay.
pub fn binding_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::KeyW => Action::Move(Direction::Forward),
        KeyCode::KeyS => Action::Move(Direction::Backward),
        KeyCode::KeyA => Action::Move(Direction::Left),
        KeyCode::KeyD => Action::Move(Direction::Right),
        KeyCode::KeyQ => Action::Move(Direction::Up),
        KeyCode::KeyE => Action::Move(Direction::Down),
        KeyCode::Escape => Action::Quit,
        KeyCode::KeyL => Action::StartLampOrbit,
        KeyCode::KeyK => Action::StopLampOrbit,
        KeyCode::F1 => Action::ToggleHud,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_maps_to_planar_moves() {
        assert_eq!(binding_for(KeyCode::KeyW), Some(Action::Move(Direction::Forward)));
        assert_eq!(binding_for(KeyCode::KeyS), Some(Action::Move(Direction::Backward)));
        assert_eq!(binding_for(KeyCode::KeyA), Some(Action::Move(Direction::Left)));
        assert_eq!(binding_for(KeyCode::KeyD), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn q_and_e_move_vertically() {
        assert_eq!(binding_for(KeyCode::KeyQ), Some(Action::Move(Direction::Up)));
        assert_eq!(binding_for(KeyCode::KeyE), Some(Action::Move(Direction::Down)));
    }

    #[test]
    fn escape_quits() {
        assert_eq!(binding_for(KeyCode::Escape), Some(Action::Quit));
    }

    #[test]
    fn unbound_key_is_none() {
        assert_eq!(binding_for(KeyCode::KeyZ), None);
    }

    #[test]
    fn only_moves_are_continuous() {
        assert!(Action::Move(Direction::Up).is_continuous());
        assert!(!Action::Quit.is_continuous());
        assert!(!Action::StartLampOrbit.is_continuous());
    }
}
