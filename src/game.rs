//! The interface the display layer expects from a game engine.
//!
//! The engine owns the maze, the entities, the scores and every rule of the
//! game. The view models only sample it, forward player intent to it and step
//! it at a level dependent rate, so these traits cover exactly that surface.

use std::io;

use glam::IVec2;
use strum_macros::Display;

use crate::direction::Direction;

/// A cell position on the board.
pub type Position = IVec2;

/// The behavioural phase of a ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Phase {
    /// Hunting the player down.
    #[default]
    Chase,
    /// Heading back to its home corner.
    Scatter,
    /// Fleeing from an empowered hunter and vulnerable to it.
    Frightened,
}

/// The player controlled entity.
pub trait Hunter {
    /// How many engine ticks a freshly activated special ability lasts.
    const SPECIAL_DURATION: u32;

    fn position(&self) -> Position;

    fn set_position(&mut self, position: Position);

    /// The current facing, or `None` if the hunter has not been pointed anywhere yet.
    fn direction(&self) -> Option<Direction>;

    fn set_direction(&mut self, direction: Direction);

    fn is_special_active(&self) -> bool;

    /// Engine ticks left on the special ability, zero when inactive.
    fn special_duration_remaining(&self) -> u32;

    /// Activates the special ability for `duration` engine ticks.
    fn activate_special(&mut self, duration: u32);
}

/// An AI controlled entity chasing the hunter.
pub trait Ghost {
    fn position(&self) -> Position;

    /// The ghost's own colour as a `#RRGGBB` string.
    fn colour(&self) -> &str;

    fn phase(&self) -> Phase;
}

/// The maze.
pub trait Board {
    /// Whatever the engine stores in a cell (walls, dots, ...).
    type Entry;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn entry(&self, position: Position) -> Self::Entry;
}

/// Named player scores.
///
/// Names and values are validated by the implementation; callers hand
/// anything over and invalid entries are simply not recorded.
pub trait ScoreBoard {
    /// The aggregate score of the game in progress.
    fn score(&self) -> i32;

    /// All entries as `"name : score"` strings, ordered by name.
    fn entries_by_name(&self) -> Vec<String>;

    /// All entries as `"name : score"` strings, ordered by score.
    fn entries_by_score(&self) -> Vec<String>;

    fn set_score(&mut self, name: &str, score: i32);
}

/// A running game.
pub trait Game {
    type Hunter: Hunter;
    type Ghost: Ghost;
    type Board: Board;
    type Scores: ScoreBoard;

    fn title(&self) -> &str;

    fn author(&self) -> &str;

    fn level(&self) -> u32;

    /// Lives left. Engines clamp this at zero.
    fn lives(&self) -> u32;

    /// Advances the simulation by one step.
    fn tick(&mut self);

    /// Restores the game to its starting state.
    fn reset(&mut self);

    fn hunter(&self) -> &Self::Hunter;

    fn hunter_mut(&mut self) -> &mut Self::Hunter;

    fn ghosts(&self) -> &[Self::Ghost];

    fn board(&self) -> &Self::Board;

    fn scores(&self) -> &Self::Scores;

    fn scores_mut(&mut self) -> &mut Self::Scores;

    /// Serializes the game into `writer` in the engine's own save format.
    fn save_to(&self, writer: &mut dyn io::Write) -> io::Result<()>;
}
