//! Test helpers for building games and playing them out.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::game::{Game, RollOutcome};

/// Creates a started game with the given roster.
pub fn started_game<S: AsRef<str>>(names: &[S]) -> Game {
    let mut game = Game::new();
    for name in names {
        game.add_player(name.as_ref()).expect("valid player name");
    }
    game.start_game().expect("roster is not empty");
    game
}

/// Records `pins` at the current cursor slot.
pub fn roll_at_cursor(game: &mut Game, pins: u8) -> RollOutcome {
    let slot = game.cursor().active().expect("game is in progress");
    game.record_roll(slot, pins)
        .unwrap_or_else(|err| panic!("roll of {pins} at {slot} rejected: {err}"))
}

/// Records each pin count in order at the cursor.
pub fn roll_sequence(game: &mut Game, pins: &[u8]) -> Vec<RollOutcome> {
    pins.iter().map(|&p| roll_at_cursor(game, p)).collect()
}

/// Picks a legal pin count for the cursor slot, or `None` if the game is not in progress.
pub fn random_legal_pins(game: &Game, rng: &mut ChaCha8Rng) -> Option<u8> {
    let slot = game.cursor().active()?;
    let choices = game.available_scores(slot);
    Some(choices[rng.gen_range(0..choices.len())])
}

/// Plays a full game for `player_count` players with random legal rolls drawn
/// from `seed`.
///
/// Returns the finished game and the outcome of every roll.
pub fn play_random_game(player_count: usize, seed: u64) -> (Game, Vec<RollOutcome>) {
    let mut game = started_game(&names(player_count));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut outcomes = Vec::new();
    while let Some(pins) = random_legal_pins(&game, &mut rng) {
        outcomes.push(roll_at_cursor(&mut game, pins));
    }
    (game, outcomes)
}

/// Roster names for `count` players.
pub fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Player {}", i + 1)).collect()
}
