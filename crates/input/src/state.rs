use crate::action::{Action, binding_for};
use roomview_common::Direction;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Movement directions in the order they are applied each frame.
const MOVE_ORDER: [Direction; 6] = [
    Direction::Forward,
    Direction::Backward,
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

/// Keyboard state polled once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    keys_held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns the one-shot action bound to the key
    /// when it goes down; key repeats and releases return `None`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<Action> {
        if !pressed {
            self.keys_held.remove(&key);
            return None;
        }
        let newly_pressed = self.keys_held.insert(key);
        match binding_for(key) {
            Some(action) if newly_pressed && !action.is_continuous() => {
                tracing::debug!(?key, ?action, "key action");
                Some(action)
            }
            _ => None,
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Directions whose keys are currently down, in a fixed order.
    pub fn held_directions(&self) -> Vec<Direction> {
        let held: HashSet<Direction> = self
            .keys_held
            .iter()
            .filter_map(|key| match binding_for(*key) {
                Some(Action::Move(direction)) => Some(direction),
                _ => None,
            })
            .collect();
        MOVE_ORDER
            .into_iter()
            .filter(|direction| held.contains(direction))
            .collect()
    }

    /// Drop all held keys, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.keys_held.clear();
    }
}
