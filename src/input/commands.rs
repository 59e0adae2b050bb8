use crate::direction::Direction;

/// Something the player asked the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    ActivateSpecial,
    ResetLevel,
    TogglePause,
}

/// Whether the game loop is currently frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseState {
    /// Games start paused until the player presses the pause key.
    #[default]
    Paused,
    Running,
}

impl PauseState {
    pub fn active(&self) -> bool {
        matches!(self, PauseState::Paused)
    }

    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            PauseState::Paused => PauseState::Running,
            PauseState::Running => PauseState::Paused,
        }
    }
}

impl GameCommand {
    /// Whether the command may be acted upon in the given pause state.
    ///
    /// Pausing works in both states, a reset only from the pause screen, and
    /// anything that steers the hunter only while the game runs.
    pub fn is_available(self, pause: PauseState) -> bool {
        match (self, pause) {
            (GameCommand::TogglePause, _) => true,
            (GameCommand::ResetLevel, PauseState::Paused) => true,
            (GameCommand::ResetLevel, PauseState::Running) => false,
            (GameCommand::MovePlayer(_) | GameCommand::ActivateSpecial, PauseState::Paused) => false,
            (GameCommand::MovePlayer(_) | GameCommand::ActivateSpecial, PauseState::Running) => true,
        }
    }
}
