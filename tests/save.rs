use std::fs;

use pacman_display::{
    config::Config,
    display::MainViewModel,
    error::SaveError,
    game::{Game, Hunter},
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{create_test_game, test_config};

#[test]
fn test_save_writes_game_to_configured_file() {
    let (config, _dir) = test_config();
    let path = config.save_filename.clone();
    let mut game = create_test_game();
    let mut view = MainViewModel::new(&mut game, config);
    view.set_player_score("Alice", 3200);

    view.save();

    let mut expected = Vec::new();
    view.game().save_to(&mut expected).expect("in-memory write");
    let written = fs::read(&path).expect("save file should exist");
    assert_eq!(String::from_utf8_lossy(&written), String::from_utf8_lossy(&expected));
}

#[test]
fn test_save_contents() {
    let (config, _dir) = test_config();
    let path = config.save_filename.clone();
    let mut game = create_test_game();
    let mut view = MainViewModel::new(&mut game, config);
    view.set_player_score("Alice", 3200);

    view.try_save().expect("save should succeed");

    let written = fs::read_to_string(&path).expect("save file should exist");
    assert_that(&written.starts_with("[Board]\n10,10\nXXXXXXXXXX\nX00000000X\n")).is_true();
    assert_that(&written.contains("title = Default Map\n")).is_true();
    assert_that(&written.contains("author = Evan\n")).is_true();
    assert_that(&written.contains("hunter = 5,2,none,0\n")).is_true();
    assert_that(&written.contains("blinky = 1,1,CHASE\n")).is_true();
    assert_that(&written.ends_with("[Scores]\nAlice : 3200\n")).is_true();
}

#[test]
fn test_save_failure_is_swallowed_and_game_untouched() {
    let (_, dir) = test_config();
    // A directory cannot be opened as a file
    let config = Config::new(dir.path());
    let mut game = create_test_game();
    let mut view = MainViewModel::new(&mut game, config);
    view.accept('p');
    view.accept('o');

    view.save();

    assert!(matches!(view.try_save(), Err(SaveError::Create { .. })));
    assert_that(&view.is_paused()).is_false();
    assert_eq!(view.game().hunter().special_duration_remaining(), 20);
    assert_eq!(view.game().lives(), 4);
}

#[test]
fn test_save_into_missing_directory_fails_to_create() {
    let (_, dir) = test_config();
    let config = Config::new(dir.path().join("missing").join("game.save"));
    let mut game = create_test_game();
    let view = MainViewModel::new(&mut game, config);

    let error = view.try_save().expect_err("parent directory does not exist");
    assert_that(&error.to_string()).contains("Could not create save file");
}
