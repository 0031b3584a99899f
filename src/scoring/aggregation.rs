use std::collections::HashMap;

use crate::ledger::models::{Game, Player, PlayerId};

/// Rebuilds every player's aggregates from the full game log.
///
/// Totals are reset, then every result in `log` is folded in log order.
/// Results that reference a player no longer in the roster are skipped.
pub fn recompute(roster: &[Player], log: &[Game]) -> Vec<Player> {
    let mut players: Vec<Player> = roster
        .iter()
        .cloned()
        .map(|mut player| {
            player.clear_aggregates();
            player
        })
        .collect();

    let index = roster_index(&players);
    for game in log {
        fold_game(&mut players, &index, game);
    }

    players
}

/// Folds a single game into the given players, returning how many results
/// matched a roster entry.
///
/// Applying the newest game of a log to aggregates that already equal
/// `recompute` of the earlier log yields exactly `recompute` of the whole log.
pub fn apply_game(players: &mut [Player], game: &Game) -> usize {
    let index = roster_index(players);
    fold_game(players, &index, game)
}

fn roster_index(players: &[Player]) -> HashMap<PlayerId, usize> {
    players
        .iter()
        .enumerate()
        .map(|(position, player)| (player.id, position))
        .collect()
}

fn fold_game(players: &mut [Player], index: &HashMap<PlayerId, usize>, game: &Game) -> usize {
    let mut applied = 0;
    for result in &game.player_results {
        if let Some(&slot) = index.get(&result.player_id) {
            let player = &mut players[slot];
            player.total_points += result.score;
            player.games_played += 1;
            applied += 1;
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::models::PlayerResult;
    use chrono::Utc;

    fn roster(names: &[&str]) -> Vec<Player> {
        names.iter().map(|name| Player::new(name.to_string())).collect()
    }

    fn game(name: &str, results: &[(PlayerId, u32, f64)]) -> Game {
        Game::new(
            name.to_string(),
            results
                .iter()
                .map(|(player_id, position, score)| PlayerResult {
                    player_id: *player_id,
                    position: *position,
                    score: *score,
                })
                .collect(),
            Utc::now(),
        )
    }

    #[test]
    fn recompute_sums_scores_and_counts_games() {
        let players = roster(&["Alice", "Bob"]);
        let (alice, bob) = (players[0].id, players[1].id);
        let log = vec![
            game("Catan", &[(alice, 1, 10.0), (bob, 2, 5.0)]),
            game("Azul", &[(bob, 1, 10.0), (alice, 2, 5.0)]),
        ];

        let updated = recompute(&players, &log);

        assert_eq!(updated[0].total_points, 15.0);
        assert_eq!(updated[0].games_played, 2);
        assert_eq!(updated[1].total_points, 15.0);
        assert_eq!(updated[1].games_played, 2);
    }

    #[test]
    fn recompute_discards_stale_aggregates() {
        let mut players = roster(&["Alice"]);
        players[0].total_points = 999.0;
        players[0].games_played = 42;

        let updated = recompute(&players, &[]);

        assert_eq!(updated[0].total_points, 0.0);
        assert_eq!(updated[0].games_played, 0);
        assert_eq!(updated[0].name, "Alice");
        assert_eq!(updated[0].id, players[0].id);
    }

    #[test]
    fn recompute_skips_results_for_removed_players() {
        let players = roster(&["Alice", "Bob"]);
        let (alice, bob) = (players[0].id, players[1].id);
        let log = vec![game("Catan", &[(alice, 1, 10.0), (bob, 2, 5.0)])];

        let remaining = vec![players[1].clone()];
        let updated = recompute(&remaining, &log);

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].total_points, 5.0);
        assert_eq!(updated[0].games_played, 1);
    }

    #[test]
    fn recompute_is_idempotent() {
        let players = roster(&["Alice", "Bob", "Carol"]);
        let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        let log = vec![
            game("Catan", &[(ids[0], 1, 10.0), (ids[1], 2, 6.666666666666666), (ids[2], 3, 3.333333333333333)]),
            game("Azul", &[(ids[2], 1, 10.0), (ids[0], 2, 5.0)]),
        ];

        let once = recompute(&players, &log);
        let twice = recompute(&once, &log);

        assert_eq!(once, twice);
    }

    #[test]
    fn apply_game_matches_full_recompute_for_appended_game() {
        let players = roster(&["Alice", "Bob", "Carol"]);
        let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        let mut log = vec![game(
            "Catan",
            &[(ids[0], 1, 10.0), (ids[1], 2, 6.666666666666666), (ids[2], 3, 3.333333333333333)],
        )];
        let mut incremental = recompute(&players, &log);

        let next = game("Azul", &[(ids[1], 1, 10.0), (ids[2], 2, 5.0)]);
        let applied = apply_game(&mut incremental, &next);
        log.push(next);

        assert_eq!(applied, 2);
        assert_eq!(incremental, recompute(&players, &log));
    }
}
