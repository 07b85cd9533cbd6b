//! Rolling momentum calculation over recent match history
//!
//! Every member of the winning side of a decided, non-canceled match
//! inside the trailing window gains a fixed step; every loser loses it.
//! The window is a hard cutoff, not a decay curve: a match one
//! millisecond past the boundary contributes nothing, one inside it
//! contributes fully. Accumulation is additive and uncapped.

use crate::config::MomentumConfig;
use crate::types::{MatchRecord, MatchStatus, MatchWinner, Player, PlayerKey, TeamPlayer};
use crate::utils::round2;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::trace;

/// Compute momentum per player key across all qualifying matches.
///
/// Players absent from the returned map implicitly carry zero momentum.
/// A `game_filter` skips matches for other games entirely; canceled
/// matches, undecided winners, and matches with a missing or malformed
/// timestamp contribute nothing. Pure function of its inputs: "now" is
/// always supplied by the caller.
pub fn calculate_momentum(
    matches: &[MatchRecord],
    game_filter: Option<&str>,
    now: DateTime<Utc>,
    config: &MomentumConfig,
) -> HashMap<PlayerKey, f64> {
    let window = config.window();
    let mut momentum: HashMap<PlayerKey, f64> = HashMap::new();

    for record in matches {
        if record.status == MatchStatus::Canceled {
            continue;
        }

        if let Some(game) = game_filter {
            if record.game.as_deref() != Some(game) {
                continue;
            }
        }

        // Missing timestamp means the row failed to parse; treat as too old.
        let Some(created_at) = record.created_at else {
            continue;
        };
        if now.signed_duration_since(created_at) > window {
            continue;
        }

        let (winners, losers) = match record.winner {
            MatchWinner::TeamA => (&record.team_a, &record.team_b),
            MatchWinner::TeamB => (&record.team_b, &record.team_a),
            MatchWinner::Undecided => continue,
        };

        trace!(match_id = %record.id, "match qualifies for momentum");

        for player in winners {
            *momentum.entry(player.key()).or_insert(0.0) += config.step;
        }
        for player in losers {
            *momentum.entry(player.key()).or_insert(0.0) -= config.step;
        }
    }

    for value in momentum.values_mut() {
        *value = round2(*value);
    }

    momentum
}

/// Annotate a player pool with momentum, producing the engine-local view
/// used for balancing: `effective_skill = round2(skill + momentum)`.
pub fn apply_momentum(
    players: &[Player],
    momentum: &HashMap<PlayerKey, f64>,
) -> Vec<TeamPlayer> {
    players
        .iter()
        .map(|player| {
            let adjustment = momentum.get(&player.key()).copied().unwrap_or(0.0);
            TeamPlayer {
                momentum: adjustment,
                effective_skill: Some(round2(f64::from(player.skill) + adjustment)),
                player: player.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generate_match_id;
    use chrono::Duration;

    fn player(id: i64, name: &str) -> Player {
        Player::new(Some(id), name, 5)
    }

    fn decided_match(
        winners: Vec<Player>,
        losers: Vec<Player>,
        created_at: Option<DateTime<Utc>>,
    ) -> MatchRecord {
        MatchRecord {
            id: generate_match_id(),
            team_a: winners,
            team_b: losers,
            score_a: 10,
            score_b: 5,
            winner: MatchWinner::TeamA,
            game: Some("tanks".to_string()),
            map: None,
            created_at,
            status: MatchStatus::Completed,
        }
    }

    #[test]
    fn test_empty_history_yields_empty_map() {
        let now = crate::utils::current_timestamp();
        let momentum = calculate_momentum(&[], None, now, &MomentumConfig::default());
        assert!(momentum.is_empty());
    }

    #[test]
    fn test_two_wins_accumulate_additively() {
        let now = crate::utils::current_timestamp();
        let config = MomentumConfig::default();
        let a = player(1, "a");
        let b = player(2, "b");

        // Two wins for A inside the window, one more outside it.
        let matches = vec![
            decided_match(
                vec![a.clone()],
                vec![b.clone()],
                Some(now - Duration::minutes(30)),
            ),
            decided_match(
                vec![a.clone()],
                vec![b.clone()],
                Some(now - Duration::hours(2)),
            ),
            decided_match(vec![a.clone()], vec![b.clone()], Some(now - Duration::hours(6))),
        ];

        let momentum = calculate_momentum(&matches, None, now, &config);
        assert_eq!(momentum.get("1"), Some(&1.0));
        assert_eq!(momentum.get("2"), Some(&-1.0));
    }

    #[test]
    fn test_window_is_a_hard_cutoff() {
        let now = crate::utils::current_timestamp();
        let config = MomentumConfig::default();
        let a = player(1, "a");
        let b = player(2, "b");

        let just_inside = decided_match(
            vec![a.clone()],
            vec![b.clone()],
            Some(now - config.window() + Duration::milliseconds(1)),
        );
        let just_outside = decided_match(
            vec![a.clone()],
            vec![b.clone()],
            Some(now - config.window() - Duration::milliseconds(1)),
        );

        let inside = calculate_momentum(&[just_inside], None, now, &config);
        assert_eq!(inside.get("1"), Some(&0.5));

        let outside = calculate_momentum(&[just_outside], None, now, &config);
        assert!(outside.is_empty());
    }

    #[test]
    fn test_canceled_and_undecided_contribute_nothing() {
        let now = crate::utils::current_timestamp();
        let a = player(1, "a");
        let b = player(2, "b");

        let mut canceled = decided_match(
            vec![a.clone()],
            vec![b.clone()],
            Some(now - Duration::minutes(5)),
        );
        canceled.status = MatchStatus::Canceled;
        canceled.score_a = 0;
        canceled.score_b = 0;

        let mut undecided = decided_match(
            vec![a.clone()],
            vec![b.clone()],
            Some(now - Duration::minutes(5)),
        );
        undecided.winner = MatchWinner::Undecided;

        let momentum =
            calculate_momentum(&[canceled, undecided], None, now, &MomentumConfig::default());
        assert!(momentum.is_empty());
    }

    #[test]
    fn test_game_filter_skips_other_games() {
        let now = crate::utils::current_timestamp();
        let a = player(1, "a");
        let b = player(2, "b");

        let mut other_game = decided_match(
            vec![a.clone()],
            vec![b.clone()],
            Some(now - Duration::minutes(5)),
        );
        other_game.game = Some("darts".to_string());
        let untagged = decided_match(
            vec![a.clone()],
            vec![b.clone()],
            Some(now - Duration::minutes(5)),
        );
        let untagged = MatchRecord {
            game: None,
            ..untagged
        };

        let momentum = calculate_momentum(
            &[other_game, untagged],
            Some("tanks"),
            now,
            &MomentumConfig::default(),
        );
        assert!(momentum.is_empty());
    }

    #[test]
    fn test_malformed_timestamp_is_excluded() {
        let now = crate::utils::current_timestamp();
        let a = player(1, "a");
        let b = player(2, "b");

        let no_timestamp = decided_match(vec![a], vec![b], None);
        let momentum =
            calculate_momentum(&[no_timestamp], None, now, &MomentumConfig::default());
        assert!(momentum.is_empty());
    }

    #[test]
    fn test_temporary_player_correlates_by_name() {
        let now = crate::utils::current_timestamp();
        // Saved in the match snapshot without an id, queried as a temp player.
        let snapshot = Player::new(None, "Carol", 4);
        let opponent = player(9, "opp");

        let matches = vec![decided_match(
            vec![snapshot],
            vec![opponent],
            Some(now - Duration::minutes(10)),
        )];
        let momentum = calculate_momentum(&matches, None, now, &MomentumConfig::default());

        let temp = Player::new(None, " carol ", 4);
        assert_eq!(momentum.get(&temp.key()), Some(&0.5));
    }

    #[test]
    fn test_apply_momentum_rounds_effective_skill() {
        let pool = vec![player(1, "a"), player(2, "b"), player(3, "c")];
        let mut momentum = HashMap::new();
        momentum.insert("1".to_string(), 1.5);
        momentum.insert("2".to_string(), -0.5);

        let annotated = apply_momentum(&pool, &momentum);
        assert_eq!(annotated[0].effective_skill, Some(6.5));
        assert_eq!(annotated[1].effective_skill, Some(4.5));
        // Unseen players carry zero momentum.
        assert_eq!(annotated[2].momentum, 0.0);
        assert_eq!(annotated[2].effective_skill, Some(5.0));
    }
}
