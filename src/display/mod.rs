//! View models sitting between a running game and whatever draws it.

pub mod board;
pub mod main_view;
pub mod score;

pub use self::board::*;
pub use self::main_view::*;
pub use self::score::*;
