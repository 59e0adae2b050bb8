use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::display::board::BoardViewModel;
use crate::display::score::ScoreViewModel;
use crate::error::SaveError;
use crate::formatter::set_frame_count;
use crate::game::{Game, Hunter, ScoreBoard};
use crate::input::commands::{GameCommand, PauseState};
use crate::input::Bindings;
use crate::schedule::{delay_for_level, is_engine_frame};

/// Ties a running game to the renderer.
///
/// The renderer drives it with [`MainViewModel::tick`] once per display frame and
/// [`MainViewModel::accept`] per typed key, and pulls everything it draws from
/// [`MainViewModel::board`] and [`MainViewModel::scores`].
pub struct MainViewModel<'a, G: Game + ?Sized> {
    game: &'a mut G,
    config: Config,
    bindings: Bindings,
    scores: ScoreViewModel,
    title: String,
    pause: PauseState,
    game_over: bool,
    /// Frames seen while running. Never reset by gameplay.
    ticks: u64,
}

impl<'a, G: Game + ?Sized> MainViewModel<'a, G> {
    /// Creates a paused view of `game` and fills in the title and scoreboard.
    pub fn new(game: &'a mut G, config: Config) -> Self {
        let mut view = Self {
            game,
            config,
            bindings: Bindings::default(),
            scores: ScoreViewModel::new(),
            title: String::new(),
            pause: PauseState::Paused,
            game_over: false,
            ticks: 0,
        };
        view.update();
        view
    }

    /// Refreshes the window title and the scoreboard from the game.
    pub fn update(&mut self) {
        self.title = format!("{} by {}", self.game.title(), self.game.author());
        self.scores.update(self.game.scores());
    }

    /// Called once per display frame.
    ///
    /// While running, steps the game whenever the frame count is a multiple of the
    /// current level's delay, then counts the frame. Game over is re-evaluated on
    /// every frame, paused or not.
    pub fn tick(&mut self) {
        if !self.pause.active() {
            let level = self.game.level();
            if is_engine_frame(self.ticks, level) {
                trace!(frame = self.ticks, level, "Stepping game");
                self.game.tick();
            } else if delay_for_level(level).is_none() {
                warn!(level, "No tick delay configured for level");
            }
            self.ticks += 1;
            set_frame_count(self.ticks);
        }

        let game_over = self.game.lives() == 0;
        if game_over && !self.game_over {
            info!(frame = self.ticks, "Game over");
        }
        self.game_over = game_over;
    }

    /// Handles a typed key. Keys are case-insensitive; anything unbound, or
    /// bound to a command that is unavailable in the current pause state, is ignored.
    pub fn accept(&mut self, key: char) {
        match self.bindings.command(key) {
            Some(command) => self.execute(command),
            None => trace!(?key, "Ignoring unbound key"),
        }
    }

    /// Like [`MainViewModel::accept`], for toolkits that deliver typed text as strings.
    pub fn accept_str(&mut self, input: &str) {
        match self.bindings.command_for_text(input) {
            Some(command) => self.execute(command),
            None => trace!(input, "Ignoring unbound input"),
        }
    }

    fn execute(&mut self, command: GameCommand) {
        if !command.is_available(self.pause) {
            trace!(?command, pause = ?self.pause, "Command unavailable");
            return;
        }

        match command {
            GameCommand::TogglePause => {
                self.pause = self.pause.toggled();
                debug!(paused = self.pause.active(), "Toggled pause");
            }
            GameCommand::ResetLevel => {
                info!("Resetting game");
                self.game.reset();
            }
            GameCommand::MovePlayer(direction) => {
                self.game.hunter_mut().set_direction(direction);
            }
            GameCommand::ActivateSpecial => {
                let hunter = self.game.hunter_mut();
                // Re-activating keeps whatever time is left instead of cutting it short
                let remaining = hunter.special_duration_remaining();
                let duration = if remaining > 0 {
                    remaining
                } else {
                    <G::Hunter as Hunter>::SPECIAL_DURATION
                };
                debug!(duration, "Activating special");
                hunter.activate_special(duration);
            }
        }
    }

    /// Writes the game to the configured save file. Failures are logged and
    /// otherwise ignored; the game itself is never touched.
    pub fn save(&self) {
        if let Err(error) = self.try_save() {
            warn!("Failed to save game: {error}");
        }
    }

    /// Writes the game to the configured save file.
    pub fn try_save(&self) -> Result<(), SaveError> {
        let path = &self.config.save_filename;
        let file = File::create(path).map_err(|source| SaveError::Create {
            path: path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        self.game
            .save_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|source| SaveError::Write {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), "Saved game");
        Ok(())
    }

    /// Flips the leaderboard between name and score order. Takes effect on the next update.
    pub fn switch_score_order(&mut self) {
        self.scores.switch_score_order();
    }

    /// Records `score` for `player`. The game decides whether the entry is valid.
    pub fn set_player_score(&mut self, player: &str, score: i32) {
        self.game.scores_mut().set_score(player, score);
    }

    /// The game's live aggregate score.
    pub fn current_score(&self) -> i32 {
        self.game.scores().score()
    }

    pub fn is_paused(&self) -> bool {
        self.pause.active()
    }

    pub fn pause_state(&self) -> PauseState {
        self.pause
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// `"{title} by {author}"` as of the last update.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Frames counted while running.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn scores(&self) -> &ScoreViewModel {
        &self.scores
    }

    pub fn board(&self) -> BoardViewModel<'_, G> {
        BoardViewModel::new(&*self.game)
    }

    pub fn game(&self) -> &G {
        &*self.game
    }

    /// Direct access to the game, for callers that manipulate it outside of key input.
    pub fn game_mut(&mut self) -> &mut G {
        &mut *self.game
    }
}
