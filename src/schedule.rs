//! Level dependent pacing of the engine.
//!
//! The renderer calls in once per display frame. The engine is only stepped on
//! every n-th frame, where n shrinks as the level rises, so higher levels play
//! faster without any floating point timers.

use std::ops::RangeInclusive;

/// A band of levels and the number of frames between two engine steps on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickDelay {
    pub levels: RangeInclusive<u32>,
    pub frames: u32,
}

impl TickDelay {
    const fn new(levels: RangeInclusive<u32>, frames: u32) -> Self {
        Self { levels, frames }
    }
}

/// Delay bands, tested in order. The first band containing the level wins.
pub const TICK_DELAYS: [TickDelay; 5] = [
    TickDelay::new(0..=1, 50),
    TickDelay::new(2..=3, 40),
    TickDelay::new(4..=5, 30),
    TickDelay::new(6..=8, 20),
    TickDelay::new(9..=u32::MAX, 10),
];

/// Returns the frame delay for `level`, or `None` if no band covers it.
pub fn delay_for_level(level: u32) -> Option<u32> {
    TICK_DELAYS
        .iter()
        .find(|delay| delay.levels.contains(&level))
        .map(|delay| delay.frames)
}

/// Whether frame number `frame` should step the engine at `level`.
pub fn is_engine_frame(frame: u64, level: u32) -> bool {
    delay_for_level(level).is_some_and(|delay| frame % u64::from(delay) == 0)
}
