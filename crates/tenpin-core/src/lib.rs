//! # Tenpin Core
//!
//! Turn and scoring engine for multi-player ten-pin bowling score sheets.
//!
//! This crate tracks a roster of players, each with ten frames, and enforces
//! the order in which rolls may be entered. Scores are always derived from
//! the recorded frames.
//!
//! ## Architecture
//!
//! - **Frames**: [`Frame`] and [`Roll`], the sheet data and its completion rules
//! - **Scoring**: [`score`], frame values and running totals
//! - **Legality**: [`legality`], which pin counts a slot accepts
//! - **Turns**: [`turn`], the cursor state machine and clickability rules
//! - **Lifecycle**: [`Game`], setup, play, reset, and standings
//!
//! ## Usage
//!
//! ```rust
//! use tenpin_core::{Game, Slot};
//!
//! let mut game = Game::new();
//! game.add_player("Ada")?;
//! game.start_game()?;
//!
//! game.record_roll(Slot::new(0, 0, 0), 7)?;
//! assert_eq!(game.available_scores(Slot::new(0, 0, 1)), vec![0, 1, 2, 3]);
//! game.record_roll(Slot::new(0, 0, 1), 3)?;
//!
//! assert_eq!(game.players()[0].total_score(), 10);
//! # Ok::<(), tenpin_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod event;
pub mod frame;
pub mod game;
pub mod legality;
pub mod player;
pub mod score;
pub mod snapshot;
pub mod standings;
pub mod turn;

pub use config::GameConfig;
pub use error::{ConfigError, GameError, GameResult};
pub use event::{EventLog, GameEvent};
pub use frame::{create_empty_frames, Frame, Frames, Roll, FRAME_COUNT, PIN_COUNT, TENTH_FRAME};
pub use game::{Game, GamePhase, RollOutcome};
pub use player::Player;
pub use score::{calculate_score, frame_score, frame_scores};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
pub use turn::{CursorState, Slot};

#[cfg(test)]
mod tests;
