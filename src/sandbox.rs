//! A minimal in-memory game.
//!
//! It implements the engine traits just far enough to drive the view models
//! without a real engine: a walled board, a hunter, four ghosts and a
//! validated score board. There is no movement or AI; a step only counts
//! itself and runs down the hunter's special timer.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::direction::Direction;
use crate::game::{Board, Game, Ghost, Hunter, Phase, Position, ScoreBoard};

/// Lives a fresh game starts with.
pub const STARTING_LIVES: u32 = 4;

/// What a board cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardItem {
    #[default]
    None,
    Wall,
    Dot,
    BigDot,
}

impl BoardItem {
    fn symbol(self) -> char {
        match self {
            BoardItem::None => '0',
            BoardItem::Wall => 'X',
            BoardItem::Dot => '1',
            BoardItem::BigDot => 'B',
        }
    }
}

/// A rectangular board with walls along its edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxBoard {
    width: u32,
    height: u32,
    cells: Vec<BoardItem>,
}

impl SandboxBoard {
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                        BoardItem::Wall
                    } else {
                        BoardItem::None
                    }
                })
            })
            .collect();

        Self { width, height, cells }
    }

    fn index(&self, position: Position) -> Option<usize> {
        let x = u32::try_from(position.x).ok()?;
        let y = u32::try_from(position.y).ok()?;
        (x < self.width && y < self.height).then(|| (y * self.width + x) as usize)
    }

    /// Places `item` at `position`. Out of bounds positions are ignored.
    pub fn set_entry(&mut self, position: Position, item: BoardItem) {
        if let Some(index) = self.index(position) {
            self.cells[index] = item;
        }
    }
}

impl Board for SandboxBoard {
    /// `None` outside the board.
    type Entry = Option<BoardItem>;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn entry(&self, position: Position) -> Option<BoardItem> {
        self.index(position).map(|index| self.cells[index])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandboxHunter {
    position: Position,
    direction: Option<Direction>,
    special_remaining: u32,
}

impl Hunter for SandboxHunter {
    const SPECIAL_DURATION: u32 = 20;

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn direction(&self) -> Option<Direction> {
        self.direction
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    fn is_special_active(&self) -> bool {
        self.special_remaining > 0
    }

    fn special_duration_remaining(&self) -> u32 {
        self.special_remaining
    }

    fn activate_special(&mut self, duration: u32) {
        self.special_remaining = duration;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxGhost {
    name: &'static str,
    position: Position,
    colour: &'static str,
    phase: Phase,
}

impl SandboxGhost {
    pub fn new(name: &'static str, colour: &'static str, position: Position) -> Self {
        Self {
            name,
            position,
            colour,
            phase: Phase::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

impl Ghost for SandboxGhost {
    fn position(&self) -> Position {
        self.position
    }

    fn colour(&self) -> &str {
        self.colour
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}

/// Player names are non-empty and alphanumeric; scores are non-negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandboxScores {
    current: i32,
    entries: BTreeMap<String, i32>,
}

impl SandboxScores {
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Adds `points` to the aggregate score. Negative amounts are ignored.
    pub fn increase_score(&mut self, points: i32) {
        if points > 0 {
            self.current = self.current.saturating_add(points);
        }
    }

    fn format_entry(name: &str, score: i32) -> String {
        format!("{name} : {score}")
    }
}

impl ScoreBoard for SandboxScores {
    fn score(&self) -> i32 {
        self.current
    }

    fn entries_by_name(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, score)| Self::format_entry(name, *score))
            .collect()
    }

    /// Highest score first; equal scores fall back to name order.
    fn entries_by_score(&self) -> Vec<String> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|(a_name, a_score), (b_name, b_score)| b_score.cmp(a_score).then_with(|| a_name.cmp(b_name)));
        entries
            .into_iter()
            .map(|(name, score)| Self::format_entry(name, *score))
            .collect()
    }

    fn set_score(&mut self, name: &str, score: i32) {
        if Self::is_valid_name(name) && score >= 0 {
            self.entries.insert(name.to_string(), score);
        }
    }
}

/// The in-memory game.
#[derive(Debug, Clone)]
pub struct SandboxGame {
    title: String,
    author: String,
    lives: u32,
    level: u32,
    hunter: SandboxHunter,
    hunter_start: Position,
    ghosts: Vec<SandboxGhost>,
    board: SandboxBoard,
    scores: SandboxScores,
    steps: u64,
    resets: u32,
}

impl SandboxGame {
    pub fn new(title: impl Into<String>, author: impl Into<String>, board: SandboxBoard) -> Self {
        let hunter_start = Position::new(board.width as i32 / 2, board.height as i32 / 2);
        let mut game = Self {
            title: title.into(),
            author: author.into(),
            lives: STARTING_LIVES,
            level: 0,
            hunter: SandboxHunter::default(),
            hunter_start,
            ghosts: Vec::new(),
            board,
            scores: SandboxScores::default(),
            steps: 0,
            resets: 0,
        };
        game.place_entities();
        game
    }

    fn place_entities(&mut self) {
        self.hunter = SandboxHunter {
            position: self.hunter_start,
            ..SandboxHunter::default()
        };

        let (width, height) = (self.board.width as i32, self.board.height as i32);
        self.ghosts = vec![
            SandboxGhost::new("Blinky", "#d54e53", Position::new(1, 1)),
            SandboxGhost::new("Inky", "#7aa6da", Position::new(width - 2, 1)),
            SandboxGhost::new("Pinky", "#c397d8", Position::new(1, height - 2)),
            SandboxGhost::new("Clyde", "#e78c45", Position::new(width - 2, height - 2)),
        ];
    }

    /// Sets the remaining lives; negative values clamp to zero.
    pub fn set_lives(&mut self, lives: i32) {
        self.lives = lives.max(0) as u32;
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn ghosts_mut(&mut self) -> &mut [SandboxGhost] {
        &mut self.ghosts
    }

    pub fn board_mut(&mut self) -> &mut SandboxBoard {
        &mut self.board
    }

    /// Number of simulation steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of times the game has been reset.
    pub fn resets(&self) -> u32 {
        self.resets
    }
}

impl Game for SandboxGame {
    type Hunter = SandboxHunter;
    type Ghost = SandboxGhost;
    type Board = SandboxBoard;
    type Scores = SandboxScores;

    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn lives(&self) -> u32 {
        self.lives
    }

    fn tick(&mut self) {
        self.steps += 1;
        self.hunter.special_remaining = self.hunter.special_remaining.saturating_sub(1);
    }

    fn reset(&mut self) {
        self.lives = STARTING_LIVES;
        self.level = 0;
        self.scores.current = 0;
        self.place_entities();
        self.resets += 1;
    }

    fn hunter(&self) -> &SandboxHunter {
        &self.hunter
    }

    fn hunter_mut(&mut self) -> &mut SandboxHunter {
        &mut self.hunter
    }

    fn ghosts(&self) -> &[SandboxGhost] {
        &self.ghosts
    }

    fn board(&self) -> &SandboxBoard {
        &self.board
    }

    fn scores(&self) -> &SandboxScores {
        &self.scores
    }

    fn scores_mut(&mut self) -> &mut SandboxScores {
        &mut self.scores
    }

    fn save_to(&self, writer: &mut dyn io::Write) -> io::Result<()> {
        writeln!(writer, "[Board]")?;
        writeln!(writer, "{},{}", self.board.width, self.board.height)?;
        for row in self.board.cells.chunks(self.board.width.max(1) as usize) {
            let line: String = row.iter().map(|item| item.symbol()).collect();
            writeln!(writer, "{line}")?;
        }

        writeln!(writer)?;
        writeln!(writer, "[Game]")?;
        writeln!(writer, "title = {}", self.title)?;
        writeln!(writer, "author = {}", self.author)?;
        writeln!(writer, "lives = {}", self.lives)?;
        writeln!(writer, "level = {}", self.level)?;
        writeln!(writer, "score = {}", self.scores.current)?;
        let direction = self.hunter.direction.as_ref().map_or("none", |direction| direction.as_ref());
        writeln!(
            writer,
            "hunter = {},{},{},{}",
            self.hunter.position.x, self.hunter.position.y, direction, self.hunter.special_remaining
        )?;
        for ghost in &self.ghosts {
            writeln!(
                writer,
                "{} = {},{},{}",
                ghost.name.to_lowercase(),
                ghost.position.x,
                ghost.position.y,
                ghost.phase
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "[Scores]")?;
        for entry in self.scores.entries_by_name() {
            writeln!(writer, "{entry}")?;
        }

        Ok(())
    }
}
