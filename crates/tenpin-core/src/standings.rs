//! Completion, winner, and leaderboard: pure functions over the roster.
//!
//! The winner and the leaderboard are two separate views. The winner is a
//! first-occurrence max scan; the leaderboard is a full stable ranking. A
//! [`crate::Game`] stops updating its winner once the game is over, while the
//! leaderboard is always computed fresh, so the two can disagree on ties or
//! when the final roll changes the lead. Callers choose which one to show.

use crate::player::Player;

/// Returns true once every player has completed all ten frames.
///
/// An empty roster is never over.
#[must_use]
pub fn is_game_over(players: &[Player]) -> bool {
    !players.is_empty() && players.iter().all(Player::is_finished)
}

/// Returns the roster index with the highest total; ties go to the earlier player.
///
/// Returns `None` for an empty roster.
#[must_use]
pub fn compute_winner(players: &[Player]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, player) in players.iter().enumerate() {
        let score = player.total_score();
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Returns roster indices ordered by descending total, stable on ties.
#[must_use]
pub fn leaderboard(players: &[Player]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by(|&a, &b| players[b].total_score().cmp(&players[a].total_score()));
    order
}
