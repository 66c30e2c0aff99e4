//! Held-key tracking
//!
//! Keys are stored lower-cased exactly as the browser reports them
//! (`"arrowup"`, `"w"`, ...). No debouncing or repeat suppression.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Set of keys currently held down
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<String>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_lowercase());
    }

    /// Record a key release
    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    /// Forget every held key (focus lost, level restart)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Read-only view of the held set
    pub fn held(&self) -> &HashSet<String> {
        &self.held
    }

    /// Movement intent for the next simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_held("arrowup") || self.is_held("w"),
            down: self.is_held("arrowdown") || self.is_held("s"),
            left: self.is_held("arrowleft") || self.is_held("a"),
            right: self.is_held("arrowright") || self.is_held("d"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputTracker::new();
        input.key_down("ArrowUp");
        assert!(input.is_held("arrowup"));
        assert!(input.tick_input().up);

        input.key_up("ArrowUp");
        assert!(!input.is_held("arrowup"));
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_case_insensitive_letters() {
        let mut input = InputTracker::new();
        input.key_down("W");
        input.key_down("d");
        let intent = input.tick_input();
        assert!(intent.up && intent.right);
        assert!(!intent.down && !intent.left);

        // Release with the other case still clears it
        input.key_up("w");
        assert!(!input.tick_input().up);
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut input = InputTracker::new();
        input.key_down("a");
        input.key_down("a");
        assert_eq!(input.held().len(), 1);
        input.key_up("a");
        assert!(input.held().is_empty());
    }

    #[test]
    fn test_unrelated_keys_are_tracked_but_ignored() {
        let mut input = InputTracker::new();
        input.key_down("Shift");
        assert!(input.is_held("shift"));
        assert_eq!(input.tick_input(), TickInput::default());
        input.clear();
        assert!(input.held().is_empty());
    }
}
