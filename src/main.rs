#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;
use std::thread;

use anyhow::Context;
use pacman_display::{
    config::{load_config, Config},
    constants::LOOP_TIME,
    display::MainViewModel,
    error::DisplayResult,
    game::{Game, Ghost, Phase, ScoreBoard},
    logging::setup_logging,
    sandbox::{SandboxBoard, SandboxGame},
};
use tracing::info;

/// Keys typed by the scripted player, one per frame, starting on the first frame.
/// `.` means no key that frame.
const SCRIPT: &str = "pdwo.asp.rp";

/// Runs the display layer headless against the sandbox game and prints what a
/// renderer would draw every time the game steps.
pub fn main() -> anyhow::Result<()> {
    let config = load_config().context("Could not load configuration")?;
    setup_logging(&config);

    // Run at full speed with `--fast`; otherwise pace frames like a 60 Hz display
    let fast = env::args().any(|arg| arg == "--fast");

    let mut game = SandboxGame::new("Default Map", "Evan", SandboxBoard::new(10, 10));
    game.scores_mut().increase_score(120);
    for (name, score) in [("Alice", 3200), ("Bob", 1800), ("Carol", 4500)] {
        game.scores_mut().set_score(name, score);
    }
    game.ghosts_mut()[0].set_phase(Phase::Frightened);

    run(&mut game, config, fast).context("Demo run failed")?;
    Ok(())
}

fn run(game: &mut SandboxGame, config: Config, fast: bool) -> DisplayResult<()> {
    let mut view = MainViewModel::new(game, config);
    info!(title = view.title(), "Starting demo");

    let frames = 200u64;
    let mut keys = SCRIPT.chars();
    let mut last_step = view.game().steps();

    for frame in 0..frames {
        if frame % 10 == 0 {
            if let Some(key) = keys.next().filter(|key| *key != '.') {
                view.accept(key);
            }
        }

        view.tick();

        let steps = view.game().steps();
        if steps != last_step {
            last_step = steps;
            print_frame(&view);
        }

        if !fast {
            thread::sleep(LOOP_TIME);
        }
    }

    view.switch_score_order();
    view.update();
    println!("{} ({})", view.scores().current_score(), view.scores().sorted_by());
    for entry in view.scores().entries() {
        println!("  {entry}");
    }

    view.try_save()?;
    Ok(())
}

fn print_frame(view: &MainViewModel<'_, SandboxGame>) {
    let board = view.board();
    let ghosts = board
        .ghosts()
        .iter()
        .map(|ghost| format!("({},{}) {}", ghost.position.x, ghost.position.y, ghost.colour))
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "frame {:>4} | step {:>3} | paused {:<5} | pacman ({},{}) {} mouth {:>3} | ghosts {} | frightened {}",
        view.ticks(),
        view.game().steps(),
        view.is_paused(),
        board.pacman_position().x,
        board.pacman_position().y,
        board.pacman_colour(),
        board.pacman_mouth_angle(),
        ghosts,
        view.game().ghosts().iter().filter(|ghost| ghost.phase() == Phase::Frightened).count(),
    );
}
