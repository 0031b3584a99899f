use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::models::{Game, GameId, Player, PlayerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub average_score: f64,
    pub total_points: f64,
    pub games_played: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub game_id: GameId,
    pub game_name: String,
    pub date: DateTime<Utc>,
    pub position: u32,
    pub score: f64,
}

/// Players with points, best average first. Ties keep roster order.
pub fn leaderboard(players: &[Player]) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| b.average_score().total_cmp(&a.average_score()));

    ranked
        .into_iter()
        .enumerate()
        .filter(|(_, player)| player.total_points > 0.0)
        .map(|(index, player)| LeaderboardEntry {
            rank: index + 1,
            player_id: player.id,
            name: player.name.clone(),
            average_score: player.average_score(),
            total_points: player.total_points,
            games_played: player.games_played,
        })
        .collect()
}

/// Every game the player took part in, newest first.
pub fn player_history(player_id: &PlayerId, games: &[Game]) -> Vec<HistoryEntry> {
    let mut history: Vec<HistoryEntry> = games
        .iter()
        .filter_map(|game| {
            game.result_for(player_id).map(|result| HistoryEntry {
                game_id: game.id,
                game_name: game.name.clone(),
                date: game.date,
                position: result.position,
                score: result.score,
            })
        })
        .collect();

    history.sort_by(|a, b| b.date.cmp(&a.date));
    history
}
