//! Game lifecycle controller.
//!
//! [`Game`] owns the roster, the turn cursor, and the derived end-of-game
//! state. It is the only type that mutates frames, and it does so one
//! operation at a time:
//!
//! 1. **Setup**: players are added in turn order.
//! 2. **In progress**: rolls are recorded at the cursor, one at a time.
//! 3. **Over**: every player has finished the tenth frame.
//!
//! Each operation either applies completely or returns an error and leaves
//! the game untouched. Totals, the game-over flag, and the leaderboard are
//! recomputed from the frames rather than patched.
//!
//! # Concurrency
//!
//! A `Game` is a plain owned value with no interior mutability. Hosts that
//! serve several games concurrently should put each one behind its own lock
//! or actor; games share no state.
//!
//! # Example
//!
//! ```
//! use tenpin_core::{Game, Slot};
//!
//! let mut game = Game::new();
//! game.add_player("Ada").unwrap();
//! game.add_player("Grace").unwrap();
//! game.start_game().unwrap();
//!
//! assert!(game.is_clickable(Slot::ORIGIN));
//! game.record_roll(Slot::ORIGIN, 10).unwrap();
//!
//! // A strike passes the turn to the next player.
//! assert_eq!(game.cursor().active(), Some(Slot::new(1, 0, 0)));
//! assert_eq!(game.players()[0].total_score(), 10);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::event::{EventLog, GameEvent};
use crate::frame::Roll;
use crate::legality::{available_scores, legal_pins};
use crate::player::Player;
use crate::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::standings::{compute_winner, is_game_over, leaderboard};
use crate::turn::{self, CursorState, Slot};

/// Coarse lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players are being added.
    Setup,
    /// Rolls are being recorded.
    InProgress,
    /// Every player has finished.
    Over,
}

/// What a successful [`Game::record_roll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Slot that was written.
    pub slot: Slot,
    /// Value stored in the slot, after spare normalization.
    pub roll: Roll,
    /// The player's total after the roll.
    pub total: u32,
    /// Cursor state after the roll.
    pub cursor: CursorState,
    /// Whether this roll finished the game.
    pub game_over: bool,
}

/// A multi-player ten-pin game.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    cursor: CursorState,
    game_over: bool,
    winner: Option<usize>,
    events: EventLog,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates an empty game in setup with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates an empty game in setup with the given configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let events = EventLog::new(config.record_events);
        Self {
            config,
            players: Vec::new(),
            cursor: CursorState::NotStarted,
            game_over: false,
            winner: None,
            events,
        }
    }

    // -------------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------------

    /// Appends a player with an empty sheet and returns their roster index.
    ///
    /// The name is stored with surrounding whitespace trimmed. Duplicate names
    /// are allowed.
    ///
    /// # Errors
    ///
    /// - [`GameError::RosterLocked`] once the game has started.
    /// - [`GameError::EmptyName`] if the name is blank.
    /// - [`GameError::RosterFull`] if the configured limit is reached.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, name: &str) -> GameResult<usize> {
        if self.cursor != CursorState::NotStarted {
            warn!("roster is locked once play starts");
            return Err(GameError::RosterLocked);
        }

        let name = name.trim();
        if name.is_empty() {
            warn!("rejected blank player name");
            return Err(GameError::EmptyName);
        }

        if let Some(limit) = self.config.max_players {
            if self.players.len() >= limit {
                warn!(limit, "roster is full");
                return Err(GameError::RosterFull { limit });
            }
        }

        let index = self.players.len();
        self.players.push(Player::new(name));
        self.events.push(GameEvent::PlayerAdded {
            index,
            name: name.to_string(),
        });
        debug!(index, "player added");
        Ok(index)
    }

    /// Starts play with the cursor on the first player's first roll.
    ///
    /// # Errors
    ///
    /// - [`GameError::AlreadyStarted`] if a game is running or finished.
    /// - [`GameError::NoPlayers`] if the roster is empty.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> GameResult<()> {
        if self.cursor != CursorState::NotStarted {
            warn!(cursor = %self.cursor, "game already started");
            return Err(GameError::AlreadyStarted);
        }
        if self.players.is_empty() {
            warn!("cannot start without players");
            return Err(GameError::NoPlayers);
        }

        self.cursor = CursorState::Active(Slot::ORIGIN);
        self.events.push(GameEvent::GameStarted {
            players: self.players.len(),
        });
        info!(players = self.players.len(), "game started");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns true if `target` may currently be opened for input.
    ///
    /// See [`turn::is_clickable`] for the rules.
    #[must_use]
    pub fn is_clickable(&self, target: Slot) -> bool {
        turn::is_clickable(self.cursor, &self.players, target)
    }

    /// Returns the legal pin counts for `target`, ascending.
    ///
    /// Empty if `target` does not name a slot in the roster.
    #[must_use]
    pub fn available_scores(&self, target: Slot) -> Vec<u8> {
        self.players
            .get(target.player)
            .and_then(|player| player.frame(target.frame))
            .map(|frame| available_scores(frame, target.roll))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Recording
    // -------------------------------------------------------------------------

    /// Records `pins` at `target`, which must be the cursor slot.
    ///
    /// On success the player's total is recomputed, completion is checked, the
    /// cursor advances (or the game ends), and the winner is updated unless
    /// this roll ended the game.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalTarget`] if `target` is not the cursor slot,
    ///   including before the game starts and after it ends.
    /// - [`GameError::InvalidScore`] if `pins` is outside the legal range.
    #[instrument(skip(self))]
    pub fn record_roll(&mut self, target: Slot, pins: u8) -> GameResult<RollOutcome> {
        let illegal = GameError::IllegalTarget {
            target,
            cursor: self.cursor,
        };

        let Some(slot) = self.cursor.active().filter(|slot| *slot == target) else {
            warn!(cursor = %self.cursor, "roll aimed away from the cursor");
            return Err(illegal);
        };
        let Some(frame) = self
            .players
            .get(slot.player)
            .and_then(|player| player.frame(slot.frame))
            .copied()
        else {
            return Err(illegal);
        };
        let Some(range) = legal_pins(&frame, slot.roll) else {
            return Err(illegal);
        };

        if !range.contains(&pins) {
            warn!(allowed_max = *range.end(), "illegal pin count");
            return Err(GameError::InvalidScore {
                pins,
                allowed_max: *range.end(),
            });
        }

        let updated = frame.with_roll(slot.roll, Roll::Pins(pins));
        let roll = updated.roll(slot.roll).unwrap_or(Roll::Pins(pins));
        let player = &mut self.players[slot.player];
        player.replace_frame(slot.frame, updated);
        let total = player.total_score();

        self.game_over = is_game_over(&self.players);
        self.cursor = if self.game_over {
            CursorState::Over
        } else {
            turn::advance(slot, &updated, self.players.len())
        };
        if !self.game_over {
            self.winner = compute_winner(&self.players);
        }

        self.events.push(GameEvent::RollRecorded { slot, roll, total });
        debug!(%roll, total, cursor = %self.cursor, "roll recorded");

        if self.game_over {
            self.events.push(GameEvent::GameOver {
                winner: self.winner,
            });
            info!(winner = ?self.winner, "game over");
        }

        Ok(RollOutcome {
            slot,
            roll,
            total,
            cursor: self.cursor,
            game_over: self.game_over,
        })
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Clears every frame and total, keeping the roster and its order, and
    /// puts the cursor back on the first player's first roll.
    ///
    /// # Errors
    ///
    /// [`GameError::NoPlayers`] if the roster is empty.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> GameResult<()> {
        if self.players.is_empty() {
            warn!("cannot reset without players");
            return Err(GameError::NoPlayers);
        }

        for player in &mut self.players {
            player.clear();
        }
        self.cursor = CursorState::Active(Slot::ORIGIN);
        self.game_over = false;
        self.winner = None;
        self.events.push(GameEvent::GameReset);
        info!(players = self.players.len(), "game reset");
        Ok(())
    }

    /// Clears the roster and returns to setup.
    #[instrument(skip(self))]
    pub fn return_to_setup(&mut self) {
        self.players.clear();
        self.cursor = CursorState::NotStarted;
        self.game_over = false;
        self.winner = None;
        self.events.push(GameEvent::ReturnedToSetup);
        info!("returned to setup");
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the roster in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`, if any.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the turn cursor.
    #[must_use]
    pub const fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        match self.cursor {
            CursorState::NotStarted => GamePhase::Setup,
            CursorState::Active(_) => GamePhase::InProgress,
            CursorState::Over => GamePhase::Over,
        }
    }

    /// Returns true once every player has finished.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the winner as tracked during play.
    ///
    /// This is the leader as of the last roll before the game ended; it is not
    /// updated by the final roll. Use [`Game::leaderboard`] for the final ranking.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns roster indices ranked by descending total, stable on ties.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<usize> {
        leaderboard(&self.players)
    }

    /// Returns the configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns journaled events without draining them.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        self.events.events()
    }

    /// Drains the event journal.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.take()
    }

    /// Returns an owned, serializable copy of the read-only view.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase(),
            cursor: self.cursor,
            players: self.players.iter().map(PlayerSnapshot::from).collect(),
            game_over: self.game_over,
            winner: self.winner,
            leaderboard: self.leaderboard(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
