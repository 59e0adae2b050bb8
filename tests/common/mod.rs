#![allow(dead_code)]

use pacman_display::{
    config::Config,
    game::{Game, Hunter, Position},
    sandbox::{SandboxBoard, SandboxGame},
};

pub const WIDTH: u32 = 10;
pub const HEIGHT: u32 = 10;

/// A 10x10 sandbox game titled "Default Map" by "Evan", hunter at (5, 2).
pub fn create_test_game() -> SandboxGame {
    let mut game = SandboxGame::new("Default Map", "Evan", SandboxBoard::new(WIDTH, HEIGHT));
    game.hunter_mut().set_position(Position::new(5, 2));
    game
}

/// A config whose save file lives in a fresh temporary directory.
///
/// Keep the directory alive for as long as the file is needed.
pub fn test_config() -> (Config, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::new(dir.path().join("game.save"));
    (config, dir)
}
