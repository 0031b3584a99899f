pub mod aggregation;
pub mod assignment;
pub mod leaderboard;

pub use aggregation::{apply_game, recompute};
pub use assignment::{assign_scores, score_for_rank, MAX_SCORE};
pub use leaderboard::{leaderboard, player_history, HistoryEntry, LeaderboardEntry};

/// Fewest participants a session can be recorded with.
pub const MIN_PARTICIPANTS: usize = 2;
