//! Error types for game operations.
//!
//! Every error is a local validation failure. An operation that returns an
//! error leaves the game exactly as it was.

use thiserror::Error;

use crate::turn::{CursorState, Slot};

/// Result alias for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Reasons a game operation can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The player name was empty after trimming whitespace.
    #[error("player name must not be blank")]
    EmptyName,

    /// A game cannot start (or restart) without players.
    #[error("at least one player is required")]
    NoPlayers,

    /// The roster already holds the configured maximum number of players.
    #[error("roster is full ({limit} players)")]
    RosterFull {
        /// Configured player limit.
        limit: usize,
    },

    /// Players cannot be added once a game has started.
    #[error("players cannot be added after the game has started")]
    RosterLocked,

    /// `start_game` was called while a game is already running or finished.
    #[error("game has already started")]
    AlreadyStarted,

    /// The pin count is outside the legal range for the slot.
    #[error("{pins} pins is not a legal roll here (allowed 0..={allowed_max})")]
    InvalidScore {
        /// Requested pin count.
        pins: u8,
        /// Largest legal pin count for the slot.
        allowed_max: u8,
    },

    /// The roll was aimed at a slot other than the cursor.
    #[error("cannot record at {target}: cursor is at {cursor}")]
    IllegalTarget {
        /// Slot the caller tried to write.
        target: Slot,
        /// Cursor state at the time of the call.
        cursor: CursorState,
    },
}

/// Errors raised while loading a [`crate::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text was not valid JSON for the expected shape.
    #[error("invalid game config: {0}")]
    Parse(#[from] serde_json::Error),

    /// `max_players` was set to zero.
    #[error("max_players must be at least 1")]
    ZeroPlayerLimit,
}
