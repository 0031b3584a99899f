use std::collections::HashMap;

use crate::ledger::models::{PlayerId, PlayerResult};

/// Points awarded to the top-ranked participant.
pub const MAX_SCORE: f64 = 10.0;

/// Converts entered finishing positions into ranked results.
///
/// Participants are stable-sorted by their entered position (missing entries
/// count as position 0, so they sort first). The entered value is only used
/// for ordering: results carry the contiguous rank `1..=n`, and the
/// participant at sorted index `i` scores `10 * ((n - i) / n)`.
pub fn assign_scores(
    participants: &[PlayerId],
    positions: &HashMap<PlayerId, u32>,
) -> Vec<PlayerResult> {
    let mut ranked: Vec<(PlayerId, u32)> = participants
        .iter()
        .map(|player_id| (*player_id, positions.get(player_id).copied().unwrap_or(0)))
        .collect();

    // sort_by_key is stable, ties keep input order
    ranked.sort_by_key(|(_, entered)| *entered);

    let field_size = ranked.len();
    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (player_id, _))| PlayerResult {
            player_id,
            position: (index + 1) as u32,
            score: score_for_rank(index, field_size),
        })
        .collect()
}

/// Score for the participant at 0-based `index` in a field of `field_size`.
pub fn score_for_rank(index: usize, field_size: usize) -> f64 {
    if field_size == 0 || index >= field_size {
        return 0.0;
    }
    MAX_SCORE * ((field_size - index) as f64 / field_size as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    fn ids(count: usize) -> Vec<PlayerId> {
        (0..count).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn four_player_field_scores_in_quarter_steps() {
        let players = ids(4);
        let positions: HashMap<PlayerId, u32> = players
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, (i + 1) as u32))
            .collect();

        let results = assign_scores(&players, &positions);

        let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![10.0, 7.5, 5.0, 2.5]);
        let ranks: Vec<u32> = results.iter().map(|r| r.position).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        let order: Vec<PlayerId> = results.iter().map(|r| r.player_id).collect();
        assert_eq!(order, players);
    }

    #[test]
    fn entered_positions_only_determine_order() {
        let players = ids(3);
        let positions = HashMap::from([(players[0], 3), (players[1], 1), (players[2], 2)]);

        let results = assign_scores(&players, &positions);

        assert_eq!(results[0].player_id, players[1]);
        assert_eq!(results[1].player_id, players[2]);
        assert_eq!(results[2].player_id, players[0]);
        assert_eq!(results[2].position, 3);
    }

    #[test]
    fn ties_keep_input_order_and_still_get_distinct_ranks() {
        let players = ids(3);
        let positions = HashMap::from([(players[0], 2), (players[1], 1), (players[2], 1)]);

        let results = assign_scores(&players, &positions);

        assert_eq!(results[0].player_id, players[1]);
        assert_eq!(results[1].player_id, players[2]);
        assert_eq!(results[2].player_id, players[0]);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn position_zero_sorts_first_and_scores_highest() {
        let players = ids(3);
        // players[2] has no entry and is treated as position 0
        let positions = HashMap::from([(players[0], 1), (players[1], 0)]);

        let results = assign_scores(&players, &positions);

        assert_eq!(results[0].player_id, players[1]);
        assert_eq!(results[0].score, MAX_SCORE);
        assert_eq!(results[1].player_id, players[2]);
        assert_eq!(results[2].player_id, players[0]);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(7)]
    fn scores_sum_to_triangular_share(#[case] field_size: usize) {
        let players = ids(field_size);
        let results = assign_scores(&players, &HashMap::new());

        let total: f64 = results.iter().map(|r| r.score).sum();
        let expected = MAX_SCORE * (field_size * (field_size + 1) / 2) as f64 / field_size as f64;
        assert!((total - expected).abs() < 1e-9);
        assert_eq!(results.len(), field_size);
    }

    #[rstest]
    #[case(0, 2, 10.0)]
    #[case(1, 2, 5.0)]
    #[case(0, 4, 10.0)]
    #[case(3, 4, 2.5)]
    #[case(4, 4, 0.0)]
    #[case(0, 0, 0.0)]
    fn score_for_rank_matches_formula(
        #[case] index: usize,
        #[case] field_size: usize,
        #[case] expected: f64,
    ) {
        assert_eq!(score_for_rank(index, field_size), expected);
    }
}
