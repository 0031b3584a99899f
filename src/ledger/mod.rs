// Public API - what other modules can use
pub use errors::LedgerError;
pub use handlers::{
    create_game, create_player, delete_game, delete_player, leaderboard, list_games,
    list_players, player_history, reset,
};
pub use models::{Game, GameId, Player, PlayerId, PlayerResult};
pub use service::LedgerService;
pub use types::{CreatePlayerRequest, NewSession};

// Internal modules
mod errors;
mod handlers;
pub mod models;
mod service;
pub mod types;
