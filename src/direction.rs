use strum_macros::AsRefStr;

/// The four cardinal directions the hunter can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Starting angle of the hunter's mouth arc, in degrees, when facing this way.
    pub const fn mouth_angle(self) -> u16 {
        match self {
            Direction::Right => 30,
            Direction::Up => 120,
            Direction::Left => 210,
            Direction::Down => 300,
        }
    }
}
