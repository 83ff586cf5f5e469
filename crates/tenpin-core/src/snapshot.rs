//! Owned, serializable views of a game for presentation layers.

use serde::{Deserialize, Serialize};

use crate::frame::{Frames, FRAME_COUNT};
use crate::game::GamePhase;
use crate::player::Player;
use crate::turn::CursorState;

/// One player's sheet as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Player name.
    pub name: String,
    /// Raw frame contents.
    pub frames: Frames,
    /// Display marks per frame (`X`, `/`, `-`, digits, or blank).
    pub marks: Vec<Vec<String>>,
    /// Running total through each frame.
    pub running_scores: [u32; FRAME_COUNT],
    /// Total score.
    pub total_score: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            frames: *player.frames(),
            marks: player.frames().iter().map(|frame| frame.marks()).collect(),
            running_scores: player.running_scores(),
            total_score: player.total_score(),
        }
    }
}

/// Everything a scoreboard needs, detached from the live [`crate::Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Lifecycle phase.
    pub phase: GamePhase,
    /// Turn cursor.
    pub cursor: CursorState,
    /// Roster in turn order.
    pub players: Vec<PlayerSnapshot>,
    /// Whether every player has finished.
    pub game_over: bool,
    /// Winner as tracked during play.
    pub winner: Option<usize>,
    /// Roster indices by descending total.
    pub leaderboard: Vec<usize>,
}

impl GameSnapshot {
    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error; plain data like this does not
    /// fail in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
