//! Logical input actions
//!
//! The simulation never sees raw key names; the input collaborator maps device
//! events to [`Action`]s (see `settings::KeyBindings`) and the tick reads an
//! immutable [`InputState`] snapshot.

use serde::{Deserialize, Serialize};

/// A logical action the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Left,
    Right,
    Jump,
    Attack,
}

impl Action {
    #[inline]
    fn bit(self) -> u8 {
        match self {
            Action::Left => 1 << 0,
            Action::Right => 1 << 1,
            Action::Jump => 1 << 2,
            Action::Attack => 1 << 3,
        }
    }
}

/// Set of currently held actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot holding exactly the given actions
    pub fn with(actions: &[Action]) -> Self {
        let mut input = Self::new();
        for &action in actions {
            input.press(action);
        }
        input
    }

    pub fn press(&mut self, action: Action) {
        self.held |= action.bit();
    }

    pub fn release(&mut self, action: Action) {
        self.held &= !action.bit();
    }

    #[inline]
    pub fn is_held(&self, action: Action) -> bool {
        self.held & action.bit() != 0
    }

    /// Release everything (e.g. on focus loss or reset)
    pub fn clear(&mut self) {
        self.held = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut input = InputState::new();
        assert!(input.is_empty());

        input.press(Action::Left);
        input.press(Action::Attack);
        assert!(input.is_held(Action::Left));
        assert!(input.is_held(Action::Attack));
        assert!(!input.is_held(Action::Right));

        input.release(Action::Left);
        assert!(!input.is_held(Action::Left));
        assert!(input.is_held(Action::Attack));
    }

    #[test]
    fn test_press_is_idempotent() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.press(Action::Jump);
        input.release(Action::Jump);
        assert!(input.is_empty());
    }
}
