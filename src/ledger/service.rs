use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::{
    errors::LedgerError,
    models::{Game, GameId, Player, PlayerId},
    types::NewSession,
};
use crate::{
    scoring::{self, HistoryEntry, LeaderboardEntry, MIN_PARTICIPANTS},
    store::{ScoreboardStore, StoreKey},
};

/// Roster and game log held together so they are always swapped as a pair.
#[derive(Debug, Clone, Default)]
struct Ledger {
    players: Vec<Player>,
    games: Vec<Game>,
}

/// Owns the roster and game log, and keeps player aggregates equal to the
/// fold of the log across every mutation.
///
/// Mutations are staged on a copy, persisted, and only then committed, so a
/// failed write leaves the in-memory state untouched.
pub struct LedgerService {
    store: ScoreboardStore,
    ledger: RwLock<Ledger>,
}

impl LedgerService {
    /// Creates an empty ledger backed by `store` without reading from it
    pub fn new(store: ScoreboardStore) -> Self {
        Self {
            store,
            ledger: RwLock::new(Ledger::default()),
        }
    }

    /// Restores roster and log from the store and rebuilds aggregates.
    ///
    /// Missing or unreadable collections start out empty.
    #[instrument(skip(store))]
    pub async fn load(store: ScoreboardStore) -> Self {
        let players = store.load_players().await;
        let games = store.load_games().await;
        let players = scoring::recompute(&players, &games);

        info!(
            player_count = players.len(),
            game_count = games.len(),
            "Scoreboard loaded"
        );

        Self {
            store,
            ledger: RwLock::new(Ledger { players, games }),
        }
    }

    pub async fn players(&self) -> Vec<Player> {
        self.ledger.read().await.players.clone()
    }

    pub async fn games(&self) -> Vec<Game> {
        self.ledger.read().await.games.clone()
    }

    pub async fn player(&self, player_id: &PlayerId) -> Option<Player> {
        let ledger = self.ledger.read().await;
        ledger.players.iter().find(|p| &p.id == player_id).cloned()
    }

    pub async fn game(&self, game_id: &GameId) -> Option<Game> {
        let ledger = self.ledger.read().await;
        ledger.games.iter().find(|g| &g.id == game_id).cloned()
    }

    /// Roster and log as one consistent snapshot
    pub async fn snapshot(&self) -> (Vec<Player>, Vec<Game>) {
        let ledger = self.ledger.read().await;
        (ledger.players.clone(), ledger.games.clone())
    }

    /// Registers a new player under a case-insensitively unique name
    #[instrument(skip(self))]
    pub async fn register_player(&self, name: &str) -> Result<Player, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidName);
        }

        let mut ledger = self.ledger.write().await;
        if ledger.players.iter().any(|p| p.has_name(name)) {
            warn!(name, "Player name already taken");
            return Err(LedgerError::DuplicatePlayerName(name.to_string()));
        }

        let player = Player::new(name.to_string());
        let mut staged = ledger.clone();
        staged.players.push(player.clone());

        self.store.save_players(&staged.players).await?;
        *ledger = staged;

        info!(player_id = %player.id, name = %player.name, "Player registered");
        Ok(player)
    }

    /// Removes a player from the roster. Recorded games keep their results.
    #[instrument(skip(self))]
    pub async fn delete_player(&self, player_id: &PlayerId) -> Result<(), LedgerError> {
        let mut ledger = self.ledger.write().await;
        let Some(index) = ledger.players.iter().position(|p| &p.id == player_id) else {
            return Err(LedgerError::NotFound(format!("player {player_id}")));
        };

        let mut staged = ledger.clone();
        let removed = staged.players.remove(index);

        self.store.save_players(&staged.players).await?;
        *ledger = staged;

        info!(player_id = %removed.id, name = %removed.name, "Player deleted");
        Ok(())
    }

    /// Records a game session and credits each participant's aggregates.
    ///
    /// Validation runs in order: non-empty name, at least two distinct
    /// participants, no recorded game with exactly the same name, and every
    /// participant present in the roster.
    #[instrument(skip(self, session), fields(name = %session.name))]
    pub async fn add_session(&self, session: NewSession) -> Result<Game, LedgerError> {
        if session.name.trim().is_empty() {
            return Err(LedgerError::InvalidName);
        }

        let mut participants: Vec<PlayerId> = Vec::with_capacity(session.participants.len());
        for player_id in &session.participants {
            if !participants.contains(player_id) {
                participants.push(*player_id);
            }
        }
        if participants.len() < MIN_PARTICIPANTS {
            return Err(LedgerError::InsufficientParticipants {
                count: participants.len(),
            });
        }

        let mut ledger = self.ledger.write().await;
        if ledger.games.iter().any(|g| g.name == session.name) {
            warn!("Game name already recorded");
            return Err(LedgerError::DuplicateGameName(session.name));
        }
        if let Some(unknown) = participants
            .iter()
            .find(|id| !ledger.players.iter().any(|p| &p.id == *id))
        {
            return Err(LedgerError::UnknownPlayer(*unknown));
        }

        let results = scoring::assign_scores(&participants, &session.positions);
        let game = Game::new(
            session.name,
            results,
            session.date.unwrap_or_else(Utc::now),
        );

        let mut staged = ledger.clone();
        staged.games.push(game.clone());
        // the new game is last in the log, so folding it alone equals a full recompute
        scoring::apply_game(&mut staged.players, &game);

        self.persist(&staged).await?;
        *ledger = staged;

        info!(
            game_id = %game.id,
            participants = game.player_results.len(),
            "Game session recorded"
        );
        Ok(game)
    }

    /// Deletes a recorded session and withdraws its points
    #[instrument(skip(self))]
    pub async fn delete_session(&self, game_id: &GameId) -> Result<(), LedgerError> {
        let mut ledger = self.ledger.write().await;
        let Some(index) = ledger.games.iter().position(|g| &g.id == game_id) else {
            return Err(LedgerError::NotFound(format!("game {game_id}")));
        };

        let mut staged = ledger.clone();
        let removed = staged.games.remove(index);
        staged.players = scoring::recompute(&staged.players, &staged.games);

        self.persist(&staged).await?;
        *ledger = staged;

        info!(game_id = %removed.id, name = %removed.name, "Game session deleted");
        Ok(())
    }

    /// Replaces roster and log wholesale. Aggregates carried by `players`
    /// are ignored and rebuilt from `games`.
    #[instrument(skip(self, players, games))]
    pub async fn replace_all(
        &self,
        players: Vec<Player>,
        games: Vec<Game>,
    ) -> Result<(), LedgerError> {
        let staged = Ledger {
            players: scoring::recompute(&players, &games),
            games,
        };

        let mut ledger = self.ledger.write().await;
        self.persist(&staged).await?;
        *ledger = staged;

        info!(
            player_count = ledger.players.len(),
            game_count = ledger.games.len(),
            "Scoreboard replaced"
        );
        Ok(())
    }

    /// Wipes roster and log, in memory and in the store
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), LedgerError> {
        let mut ledger = self.ledger.write().await;
        // log first: a roster without games is still consistent
        self.store.clear(StoreKey::Games).await?;
        self.store.clear(StoreKey::Players).await?;
        *ledger = Ledger::default();

        info!("Scoreboard reset");
        Ok(())
    }

    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        scoring::leaderboard(&self.ledger.read().await.players)
    }

    pub async fn player_history(&self, player_id: &PlayerId) -> Result<Vec<HistoryEntry>, LedgerError> {
        let ledger = self.ledger.read().await;
        if !ledger.players.iter().any(|p| &p.id == player_id) {
            return Err(LedgerError::NotFound(format!("player {player_id}")));
        }
        Ok(scoring::player_history(player_id, &ledger.games))
    }

    async fn persist(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        self.store.save_players(&ledger.players).await?;
        self.store.save_games(&ledger.games).await?;
        debug!("Roster and game log persisted");
        Ok(())
    }
}
