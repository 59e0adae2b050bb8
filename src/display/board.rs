use smallvec::SmallVec;

use crate::constants::{FRIGHTENED_GHOST_COLOUR, HUNTER_COLOUR, HUNTER_SPECIAL_COLOUR, IDLE_MOUTH_ANGLE};
use crate::direction::Direction;
use crate::game::{Game, Ghost, Hunter, Phase, Position};

/// Where a ghost is and which colour to draw it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostSprite<'a> {
    pub position: Position,
    pub colour: &'a str,
}

/// Ghost lists stay on the stack for the usual four ghosts.
pub type GhostSprites<'a> = SmallVec<[GhostSprite<'a>; 4]>;

/// Starting angle of the hunter's mouth arc for a facing.
pub fn mouth_angle(direction: Option<Direction>) -> u16 {
    match direction {
        Some(direction) => direction.mouth_angle(),
        None => IDLE_MOUTH_ANGLE,
    }
}

/// Colour of the hunter depending on whether its special ability is active.
pub fn hunter_colour(special_active: bool) -> &'static str {
    if special_active {
        HUNTER_SPECIAL_COLOUR
    } else {
        HUNTER_COLOUR
    }
}

/// Colour of a ghost. Frightened ghosts all share one colour; otherwise the ghost keeps its own.
pub fn ghost_colour<G: Ghost + ?Sized>(ghost: &G) -> &str {
    match ghost.phase() {
        Phase::Frightened => FRIGHTENED_GHOST_COLOUR,
        Phase::Chase | Phase::Scatter => ghost.colour(),
    }
}

/// Read-only view of the board and its entities for the renderer.
///
/// Every accessor samples the engine when called; nothing is cached between frames.
pub struct BoardViewModel<'a, G: Game + ?Sized> {
    game: &'a G,
}

impl<'a, G: Game + ?Sized> BoardViewModel<'a, G> {
    pub fn new(game: &'a G) -> Self {
        Self { game }
    }

    pub fn lives(&self) -> u32 {
        self.game.lives()
    }

    pub fn level(&self) -> u32 {
        self.game.level()
    }

    pub fn pacman_colour(&self) -> &'static str {
        hunter_colour(self.game.hunter().is_special_active())
    }

    pub fn pacman_mouth_angle(&self) -> u16 {
        mouth_angle(self.game.hunter().direction())
    }

    pub fn pacman_position(&self) -> Position {
        self.game.hunter().position()
    }

    pub fn board(&self) -> &'a G::Board {
        self.game.board()
    }

    /// Positions and colours of every ghost, in no particular order.
    pub fn ghosts(&self) -> GhostSprites<'a> {
        self.game
            .ghosts()
            .iter()
            .map(|ghost| GhostSprite {
                position: ghost.position(),
                colour: ghost_colour(ghost),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Painted(&'static str, Phase);

    impl Ghost for Painted {
        fn position(&self) -> Position {
            Position::ZERO
        }

        fn colour(&self) -> &str {
            self.0
        }

        fn phase(&self) -> Phase {
            self.1
        }
    }

    #[test]
    fn test_undirected_hunter_has_closed_mouth_angle() {
        assert_eq!(mouth_angle(None), 0);
    }

    #[test]
    fn test_frightened_overrides_own_colour() {
        assert_eq!(ghost_colour(&Painted("#FF0000", Phase::Frightened)), "#0000FF");
        assert_eq!(ghost_colour(&Painted("#FF0000", Phase::Scatter)), "#FF0000");
        assert_eq!(ghost_colour(&Painted("#FFB8FF", Phase::Chase)), "#FFB8FF");
    }

    #[test]
    fn test_hunter_colours() {
        assert_eq!(hunter_colour(true), "#CDC3FF");
        assert_eq!(hunter_colour(false), "#FFE709");
    }
}
