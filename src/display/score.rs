use strum_macros::{AsRefStr, Display};
use tracing::debug;

use crate::game::ScoreBoard;

/// The order in which the leaderboard lists its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display)]
pub enum SortOrder {
    #[default]
    #[strum(to_string = "Sorted by Name")]
    ByName,
    #[strum(to_string = "Sorted by Score")]
    ByScore,
}

impl SortOrder {
    /// Returns the other ordering.
    pub fn switched(self) -> Self {
        match self {
            SortOrder::ByName => SortOrder::ByScore,
            SortOrder::ByScore => SortOrder::ByName,
        }
    }
}

/// Display state of the scoreboard: the current score line and the sorted leaderboard.
///
/// Nothing here is live. [`ScoreViewModel::update`] snapshots the engine's
/// score board; everything else reads that snapshot.
#[derive(Debug, Clone, Default)]
pub struct ScoreViewModel {
    order: SortOrder,
    current_score: String,
    sorted_by: String,
    entries: Vec<String>,
}

impl ScoreViewModel {
    /// Creates an empty view sorted by name. Call [`ScoreViewModel::update`] to fill it.
    pub fn new() -> Self {
        Self {
            sorted_by: SortOrder::default().to_string(),
            ..Self::default()
        }
    }

    /// Re-reads the score line, the sort label and the leaderboard from `scores`.
    ///
    /// The leaderboard is replaced wholesale with the listing for the current order.
    pub fn update<S: ScoreBoard + ?Sized>(&mut self, scores: &S) {
        self.current_score = format!("Score: {}", scores.score());
        self.sorted_by = self.order.to_string();
        self.entries = match self.order {
            SortOrder::ByName => scores.entries_by_name(),
            SortOrder::ByScore => scores.entries_by_score(),
        };
    }

    /// Flips between sorting by name and by score.
    ///
    /// The leaderboard itself only changes on the next [`ScoreViewModel::update`].
    pub fn switch_score_order(&mut self) {
        self.order = self.order.switched();
        debug!(order = self.order.as_ref(), "Switched score order");
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The `"Score: N"` line as of the last update.
    pub fn current_score(&self) -> &str {
        &self.current_score
    }

    /// `"Sorted by Name"` or `"Sorted by Score"` as of the last update.
    pub fn sorted_by(&self) -> &str {
        &self.sorted_by
    }

    /// `"name : score"` rows as of the last update.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
