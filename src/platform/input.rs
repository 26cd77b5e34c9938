//! Keyboard input mapping
//!
//! Keys are identified by `KeyboardEvent.key` values so the mapping can be
//! tested without a browser.

/// Actions a key press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Flap
    Jump,
    /// Start a new session once the current one is over
    Restart,
    /// Toggle demo mode
    ToggleAutopilot,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn map_key(key: &str) -> Option<InputAction> {
    match key {
        " " | "Spacebar" | "ArrowUp" => Some(InputAction::Jump),
        "Enter" | "r" | "R" => Some(InputAction::Restart),
        "i" | "I" => Some(InputAction::ToggleAutopilot),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(" "), Some(InputAction::Jump));
        assert_eq!(map_key("ArrowUp"), Some(InputAction::Jump));
        assert_eq!(map_key("Enter"), Some(InputAction::Restart));
        assert_eq!(map_key("R"), Some(InputAction::Restart));
        assert_eq!(map_key("i"), Some(InputAction::ToggleAutopilot));
        assert_eq!(map_key("x"), None);
        assert_eq!(map_key("Escape"), None);
    }
}
