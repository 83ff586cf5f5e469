//! Event journal for accepted game operations.
//!
//! Every operation that changes a [`crate::Game`] appends one or more
//! [`GameEvent`]s. Rejected operations append nothing. The journal is drained
//! with [`EventLog::take`], typically by a presentation layer that animates
//! strikes, shows a winner banner, or persists a replay.
//!
//! # Example
//!
//! ```
//! use tenpin_core::event::GameEvent;
//! use tenpin_core::Game;
//!
//! let mut game = Game::new();
//! game.add_player("Ada").unwrap();
//! game.start_game().unwrap();
//!
//! let events = game.take_events();
//! assert!(matches!(events[0], GameEvent::PlayerAdded { index: 0, .. }));
//! assert!(matches!(events[1], GameEvent::GameStarted { players: 1 }));
//! assert!(game.events().is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::frame::Roll;
use crate::turn::Slot;

/// Something that happened to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player joined the roster.
    PlayerAdded {
        /// Roster index of the new player.
        index: usize,
        /// Name as entered.
        name: String,
    },
    /// Play began.
    GameStarted {
        /// Number of players in the roster.
        players: usize,
    },
    /// A roll was written into a slot.
    RollRecorded {
        /// Slot that was written.
        slot: Slot,
        /// Value stored, after spare normalization.
        roll: Roll,
        /// The player's total after the roll.
        total: u32,
    },
    /// The last required roll was recorded.
    GameOver {
        /// Winner as tracked during play.
        winner: Option<usize>,
    },
    /// All frames were cleared; the roster was kept.
    GameReset,
    /// The roster was cleared and the game returned to setup.
    ReturnedToSetup,
}

impl GameEvent {
    /// Returns the roster index this event concerns, if any.
    #[must_use]
    pub const fn player(&self) -> Option<usize> {
        match self {
            Self::PlayerAdded { index, .. } => Some(*index),
            Self::RollRecorded { slot, .. } => Some(slot.player),
            Self::GameOver { winner } => *winner,
            Self::GameStarted { .. } | Self::GameReset | Self::ReturnedToSetup => None,
        }
    }
}

/// Ordered, drainable list of [`GameEvent`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    enabled: bool,
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates a log; a disabled log ignores every event.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            events: Vec::new(),
        }
    }

    /// Appends an event if the log is enabled.
    pub fn push(&mut self, event: GameEvent) {
        if self.enabled {
            self.events.push(event);
        }
    }

    /// Drains and returns all events in the order they were recorded.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the recorded events without draining them.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Returns the number of events currently in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
