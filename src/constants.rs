//! This module contains all the constants used by the display layer.

use std::time::Duration;

/// Nominal time between two display frames. Only the demo loop sleeps on this;
/// the view models reason purely in frame counts.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Colour of the hunter while its special ability is active.
pub const HUNTER_SPECIAL_COLOUR: &str = "#CDC3FF";
/// Colour of the hunter otherwise.
pub const HUNTER_COLOUR: &str = "#FFE709";
/// Colour every frightened ghost is drawn with, regardless of its own colour.
pub const FRIGHTENED_GHOST_COLOUR: &str = "#0000FF";

/// Mouth angle used while the hunter has no facing direction yet.
pub const IDLE_MOUTH_ANGLE: u16 = 0;

/// Save file used when nothing else is configured.
pub const DEFAULT_SAVE_FILENAME: &str = "pacman.save";
/// Log filter used when neither `RUST_LOG` nor the configuration provide one.
pub const DEFAULT_LOG_FILTER: &str = "warn,pacman_display=info";
