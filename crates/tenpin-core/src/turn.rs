//! Turn cursor: the state machine that decides which slot is writable.
//!
//! The cursor points at exactly one `(player, frame, roll)` [`Slot`] while a
//! game is in progress. Rolls are entered append-only: history is never
//! rewritten, and the cursor only moves forward in turn order.
//!
//! # Turn order
//!
//! Players bowl frame by frame. Within a regular frame the cursor moves to the
//! second roll unless the first was a strike; otherwise it passes to the next
//! player, and the frame number advances when play wraps back to the first
//! player. In the tenth frame each player bowls two or three rolls in a row,
//! and the game ends when play would wrap back to the first player.
//!
//! ```text
//! NotStarted --start--> Active(0,0,0) --record--> Active(..) --record--> ... --> Over
//!      ^                     ^                                                 |
//!      |                     +-------------------- reset ----------------------+
//!      +------------------------------ return to setup ------------------------+
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::frame::{Frame, FRAME_COUNT, TENTH_FRAME};
use crate::player::Player;

// =============================================================================
// Slot
// =============================================================================

/// Coordinates of one roll slot: player, frame, and roll index (all 0-based).
///
/// The derived ordering is lexicographic on `(player, frame, roll)`, which is
/// the order used to reject writes into earlier slots. The order in which
/// slots are actually played is given by [`Slot::turn_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Index into the roster.
    pub player: usize,
    /// Frame index, 0 through 9.
    pub frame: usize,
    /// Roll index within the frame.
    pub roll: usize,
}

impl Slot {
    /// The first slot of a game.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Creates a slot coordinate.
    #[must_use]
    pub const fn new(player: usize, frame: usize, roll: usize) -> Self {
        Self {
            player,
            frame,
            roll,
        }
    }

    /// Returns the key under which slots are played: frame, then player, then roll.
    #[must_use]
    pub const fn turn_order(&self) -> (usize, usize, usize) {
        (self.frame, self.player, self.roll)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player {} frame {} roll {}",
            self.player + 1,
            self.frame + 1,
            self.roll + 1
        )
    }
}

impl From<(usize, usize, usize)> for Slot {
    fn from((player, frame, roll): (usize, usize, usize)) -> Self {
        Self::new(player, frame, roll)
    }
}

// =============================================================================
// Cursor State
// =============================================================================

/// State of the turn cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorState {
    /// Players are still being added.
    #[default]
    NotStarted,
    /// The given slot is the single writable slot.
    Active(Slot),
    /// Every player has finished the tenth frame.
    Over,
}

impl CursorState {
    /// Returns the writable slot, if a game is in progress.
    #[must_use]
    pub const fn active(&self) -> Option<Slot> {
        match self {
            Self::Active(slot) => Some(*slot),
            Self::NotStarted | Self::Over => None,
        }
    }

    /// Returns true once the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::Over)
    }
}

impl fmt::Display for CursorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("not started"),
            Self::Active(slot) => write!(f, "{slot}"),
            Self::Over => f.write_str("game over"),
        }
    }
}

// =============================================================================
// Clickability
// =============================================================================

/// Returns true if `target` may currently be opened for input.
///
/// Rules, first match wins:
///
/// 1. Nothing is clickable before the game starts or after it ends, and
///    targets outside the roster or sheet never are.
/// 2. Before the first roll, only the origin slot is clickable.
/// 3. Slots before the cursor in `(player, frame, roll)` order are closed.
/// 4. Within the cursor's frame: the cursor slot itself, or the next roll once
///    the cursor slot holds a value.
/// 5. Same player, next frame: its first roll, once the cursor frame is complete.
/// 6. Next player (wrapping), first frame: its first roll, once the cursor
///    frame is complete.
/// 7. Tenth frame, once that player's first nine frames are complete: the first
///    roll while empty; the second once the first is filled and it is empty;
///    the third after a strike or spare, while empty.
/// 8. Anything else is closed.
///
/// Rule 7 can open a tenth-frame slot other than the cursor. Recording still
/// requires the exact cursor slot (see [`crate::Game::record_roll`]).
#[must_use]
pub fn is_clickable(cursor: CursorState, players: &[Player], target: Slot) -> bool {
    let Some(current) = cursor.active() else {
        return false;
    };
    let Some(target_frame) = slot_frame(players, target) else {
        return false;
    };
    let Some(cursor_frame) = slot_frame(players, current) else {
        return false;
    };

    if current == Slot::ORIGIN && !cursor_frame.is_filled(0) {
        return target == Slot::ORIGIN;
    }

    if target < current {
        return false;
    }

    if target.player == current.player && target.frame == current.frame {
        return target.roll == current.roll
            || (target.roll == current.roll + 1 && cursor_frame.is_filled(current.roll));
    }

    if target.player == current.player && target.frame == current.frame + 1 {
        return target.roll == 0 && cursor_frame.is_complete();
    }

    let next_player = (current.player + 1) % players.len();
    if target.player == next_player && target.frame == 0 && target.roll == 0 {
        return cursor_frame.is_complete();
    }

    if target.frame == TENTH_FRAME {
        return tenth_frame_open(&players[target.player], target_frame, target.roll);
    }

    false
}

fn tenth_frame_open(player: &Player, frame: &Frame, roll: usize) -> bool {
    if !player.reached_tenth() {
        return false;
    }

    match roll {
        0 => !frame.is_filled(0),
        1 => frame.is_filled(0) && !frame.is_filled(1),
        2 => frame.earns_bonus_roll() && !frame.is_filled(2),
        _ => false,
    }
}

fn slot_frame(players: &[Player], slot: Slot) -> Option<&Frame> {
    let frame = players.get(slot.player)?.frame(slot.frame)?;
    (slot.roll < frame.slot_count()).then_some(frame)
}

// =============================================================================
// Advancing
// =============================================================================

/// Returns the cursor state after a roll was recorded at `recorded`.
///
/// `frame` is the recorded frame as it stands after the write.
///
/// - Regular frame, first roll, not a strike: the second roll of the same frame.
/// - Regular frame otherwise: the next player's first roll; the frame number
///   advances when play wraps back to the first player.
/// - Tenth frame: first roll to second; second roll to the third if a strike
///   or spare earned it; the frame is then done and play passes to the next
///   player's tenth frame, or ends when it would wrap to the first player.
#[must_use]
pub fn advance(recorded: Slot, frame: &Frame, player_count: usize) -> CursorState {
    let next_player = (recorded.player + 1) % player_count.max(1);

    if recorded.frame < TENTH_FRAME {
        if recorded.roll == 0 && !frame.is_strike() {
            return CursorState::Active(Slot::new(recorded.player, recorded.frame, 1));
        }
        let next_frame = if next_player == 0 {
            recorded.frame + 1
        } else {
            recorded.frame
        };
        debug_assert!(next_frame < FRAME_COUNT);
        return CursorState::Active(Slot::new(next_player, next_frame, 0));
    }

    match recorded.roll {
        0 => CursorState::Active(Slot::new(recorded.player, TENTH_FRAME, 1)),
        1 if frame.earns_bonus_roll() => {
            CursorState::Active(Slot::new(recorded.player, TENTH_FRAME, 2))
        }
        _ if next_player == 0 => CursorState::Over,
        _ => CursorState::Active(Slot::new(next_player, TENTH_FRAME, 0)),
    }
}

// =============================================================================
// Tests
// =============================================================================
