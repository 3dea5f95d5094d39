//! Keyboard state tracking
//!
//! Key events arrive asynchronously from the page; the frame loop samples a
//! snapshot once per frame.

use crate::sim::FrameInput;

/// Which steering keys are currently held
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    left: bool,
    right: bool,
}

/// Steering direction a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

impl Steer {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Steer::Left),
            "ArrowRight" | "d" | "D" => Some(Steer::Right),
            _ => None,
        }
    }
}

impl KeyState {
    /// Record a keydown (`pressed = true`) or keyup. Returns false for keys
    /// that don't steer.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        match Steer::from_key(key) {
            Some(Steer::Left) => self.left = pressed,
            Some(Steer::Right) => self.right = pressed,
            None => return false,
        }
        true
    }

    /// Drop all held keys (window lost focus, keyup will never arrive)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    pub fn snapshot(&self) -> FrameInput {
        FrameInput {
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_tracking() {
        let mut keys = KeyState::default();
        assert!(keys.handle_key("ArrowLeft", true));
        assert_eq!(keys.snapshot(), FrameInput { left: true, right: false });

        assert!(keys.handle_key("d", true));
        assert_eq!(keys.snapshot(), FrameInput { left: true, right: true });

        assert!(keys.handle_key("ArrowLeft", false));
        assert_eq!(keys.snapshot(), FrameInput { left: false, right: true });

        assert!(!keys.handle_key("Enter", true));
        keys.release_all();
        assert_eq!(keys.snapshot(), FrameInput::default());
    }
}
