//! Display layer of the Pac-Man game: frame pacing, key input and render projections.

pub mod config;
pub mod constants;
pub mod direction;
pub mod display;
pub mod error;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod sandbox;
pub mod schedule;
