//! Crate-level tests that drive whole games.
//!
//! - `integration.rs`: end-to-end games through [`crate::Game`]
//! - `determinism.rs`: seeded replays produce identical sheets and journals
//! - `properties.rs`: proptest checks over random legal games
//! - `helpers.rs`: game setup and roll-entry utilities

mod determinism;
mod helpers;

pub use helpers::*;
