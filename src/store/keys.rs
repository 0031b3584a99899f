use strum_macros::{AsRefStr, Display};

/// Fixed logical keys the scoreboard persists under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum StoreKey {
    #[strum(serialize = "players")]
    Players,
    #[strum(serialize = "games")]
    Games,
    #[strum(serialize = "boardGames")]
    BoardGames,
    #[strum(serialize = "bggUsername")]
    BggUsername,
}
