//! Manual roster overrides on a generated assignment
//!
//! Moves and swaps are direct list mutations requested by the user after
//! the randomized search has run; they never re-invoke the search. Both
//! operations report success as a bool so the caller can ignore a tap on
//! an impossible target instead of handling an error.

use crate::types::{Side, TeamAssignment};

/// Move one player to the given side.
///
/// Returns false when the player is not on the opposite side or the
/// destination is already at `players_per_team` capacity.
pub fn move_player(
    assignment: &mut TeamAssignment,
    key: &str,
    to: Side,
    players_per_team: usize,
) -> bool {
    if assignment.side(to).len() >= players_per_team {
        return false;
    }

    let from = to.other();
    let Some(index) = position(assignment, from, key) else {
        return false;
    };

    let player = assignment.side_mut(from).remove(index);
    assignment.side_mut(to).push(player);
    true
}

/// Swap two players sitting on opposite sides, displacing each onto the
/// other roster. Side lengths are unchanged, so capacity never blocks a
/// swap.
///
/// Returns false when either player is missing or both sit on the same
/// side.
pub fn swap_players(assignment: &mut TeamAssignment, key_a: &str, key_b: &str) -> bool {
    let Some((side_a, index_a)) = locate(assignment, key_a) else {
        return false;
    };
    let Some((side_b, index_b)) = locate(assignment, key_b) else {
        return false;
    };
    if side_a == side_b {
        return false;
    }

    let (a_index, b_index) = match side_a {
        Side::A => (index_a, index_b),
        Side::B => (index_b, index_a),
    };
    std::mem::swap(
        &mut assignment.team_a[a_index],
        &mut assignment.team_b[b_index],
    );
    true
}

fn position(assignment: &TeamAssignment, side: Side, key: &str) -> Option<usize> {
    assignment.side(side).iter().position(|p| p.key() == key)
}

fn locate(assignment: &TeamAssignment, key: &str) -> Option<(Side, usize)> {
    position(assignment, Side::A, key)
        .map(|i| (Side::A, i))
        .or_else(|| position(assignment, Side::B, key).map(|i| (Side::B, i)))
}
