use std::collections::HashMap;

use crate::{direction::Direction, input::commands::GameCommand};

pub mod commands;

pub use commands::PauseState;

/// Maps typed keys to the commands they trigger.
///
/// Keys are matched case-insensitively; every key is stored in its lowercase form.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<char, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        key_bindings.insert('w', GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert('s', GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert('a', GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert('d', GameCommand::MovePlayer(Direction::Right));

        // Game actions
        key_bindings.insert('o', GameCommand::ActivateSpecial);
        key_bindings.insert('p', GameCommand::TogglePause);
        key_bindings.insert('r', GameCommand::ResetLevel);

        Self { key_bindings }
    }
}

impl Bindings {
    /// Looks up the command bound to `key`, ignoring case.
    pub fn command(&self, key: char) -> Option<GameCommand> {
        // Only single-character lowercase forms can be bound
        let mut lower = key.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(key), None) => self.key_bindings.get(&key).copied(),
            _ => None,
        }
    }

    /// Looks up the command for a typed string, which must be exactly one character long.
    pub fn command_for_text(&self, text: &str) -> Option<GameCommand> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => self.command(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let bindings = Bindings::default();
        assert_eq!(bindings.command('P'), Some(GameCommand::TogglePause));
        assert_eq!(bindings.command('p'), Some(GameCommand::TogglePause));
        assert_eq!(bindings.command('D'), Some(GameCommand::MovePlayer(Direction::Right)));
    }

    #[test]
    fn test_unbound_keys() {
        let bindings = Bindings::default();
        for key in ['q', 'x', ' ', '1', 'İ'] {
            assert_eq!(bindings.command(key), None, "{key:?}");
        }
    }

    #[test]
    fn test_text_must_be_single_character() {
        let bindings = Bindings::default();
        assert_eq!(bindings.command_for_text("o"), Some(GameCommand::ActivateSpecial));
        assert_eq!(bindings.command_for_text(""), None);
        assert_eq!(bindings.command_for_text("pp"), None);
    }
}
