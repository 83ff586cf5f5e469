//! Frame model: the fixed-shape roll slots of a bowling score sheet.
//!
//! This module provides:
//! - [`Roll`]: The contents of one roll slot (pins, spare marker, or empty)
//! - [`Frame`]: One frame, either a regular two-slot frame or the three-slot tenth
//! - [`create_empty_frames`]: A fresh sheet of ten empty frames
//!
//! Frames are plain containers. They know the spare-normalization rule and how to
//! answer structural questions ("is this frame complete?"), but they perform no
//! legality checks. Whether a pin count may be written into a slot is decided by
//! [`crate::legality`] and [`crate::turn`].
//!
//! # Example
//!
//! ```
//! use tenpin_core::frame::{Frame, Roll};
//!
//! let frame = Frame::regular()
//!     .with_roll(0, Roll::Pins(7))
//!     .with_roll(1, Roll::Pins(3));
//!
//! // 7 + 3 is stored as a spare marker
//! assert_eq!(frame.roll(1), Some(Roll::Spare));
//! assert!(frame.is_complete());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of frames on a player's sheet.
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth (last) frame.
pub const TENTH_FRAME: usize = FRAME_COUNT - 1;

/// Number of pins standing at the start of a frame.
pub const PIN_COUNT: u8 = 10;

/// A player's full sheet of frames.
pub type Frames = [Frame; FRAME_COUNT];

// =============================================================================
// Roll
// =============================================================================

/// The contents of a single roll slot.
///
/// A strike is `Pins(10)` in the first slot of a frame. There is no dedicated
/// strike marker: a strike closes a regular frame by rule, not by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Roll {
    /// Slot not yet filled.
    #[default]
    Unrecorded,
    /// Number of pins knocked down (0 to 10).
    Pins(u8),
    /// Second roll that, combined with the first, clears all ten pins.
    Spare,
}

impl Roll {
    /// A roll that knocks down every pin.
    pub const STRIKE: Self = Self::Pins(PIN_COUNT);

    /// Returns true if the slot holds any value.
    #[must_use]
    pub const fn is_recorded(self) -> bool {
        !matches!(self, Self::Unrecorded)
    }

    /// Returns true if this roll knocked down all ten pins.
    #[must_use]
    pub const fn is_strike(self) -> bool {
        matches!(self, Self::Pins(PIN_COUNT))
    }

    /// Returns true if this is the spare marker.
    #[must_use]
    pub const fn is_spare(self) -> bool {
        matches!(self, Self::Spare)
    }

    /// Returns the raw pin count, or 0 for empty slots and spare markers.
    ///
    /// Spare markers carry no pin count of their own; their value depends on the
    /// first roll of the frame.
    #[must_use]
    pub const fn pins_or_zero(self) -> u8 {
        match self {
            Self::Pins(pins) => pins,
            Self::Unrecorded | Self::Spare => 0,
        }
    }
}

impl fmt::Display for Roll {
    /// Renders the conventional score-sheet symbol (`X`, `/`, `-`, digit, or blank).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecorded => Ok(()),
            Self::Spare => f.write_str("/"),
            Self::Pins(PIN_COUNT) => f.write_str("X"),
            Self::Pins(0) => f.write_str("-"),
            Self::Pins(pins) => write!(f, "{pins}"),
        }
    }
}

// =============================================================================
// Frame
// =============================================================================

/// One frame of a player's sheet.
///
/// Frames 1 through 9 have two slots; the tenth frame has three so that a
/// strike or spare there can be followed by its bonus rolls.
///
/// # Invariants
///
/// - Slots are filled strictly left to right.
/// - In a regular frame, the two rolls never total more than ten pins; a strike
///   leaves the second slot unrecorded.
/// - The tenth frame's third slot is only filled after a strike or spare.
///
/// These hold for every frame written through [`crate::Game`]; the container
/// itself does not enforce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// Frames 1 through 9.
    Regular([Roll; 2]),
    /// The tenth frame.
    Tenth([Roll; 3]),
}

impl Frame {
    /// Creates an empty two-slot frame.
    #[must_use]
    pub const fn regular() -> Self {
        Self::Regular([Roll::Unrecorded; 2])
    }

    /// Creates an empty three-slot tenth frame.
    #[must_use]
    pub const fn tenth() -> Self {
        Self::Tenth([Roll::Unrecorded; 3])
    }

    /// Creates the empty frame that belongs at `index` on a sheet.
    #[must_use]
    pub const fn empty_at(index: usize) -> Self {
        if index == TENTH_FRAME {
            Self::tenth()
        } else {
            Self::regular()
        }
    }

    /// Returns the slots of this frame.
    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        match self {
            Self::Regular(rolls) => rolls,
            Self::Tenth(rolls) => rolls,
        }
    }

    fn rolls_mut(&mut self) -> &mut [Roll] {
        match self {
            Self::Regular(rolls) => rolls,
            Self::Tenth(rolls) => rolls,
        }
    }

    /// Returns the number of slots (2 or 3).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.rolls().len()
    }

    /// Returns true for the three-slot tenth frame.
    #[must_use]
    pub const fn is_tenth(&self) -> bool {
        matches!(self, Self::Tenth(_))
    }

    /// Returns the roll at `slot`, or `None` if the frame has no such slot.
    #[must_use]
    pub fn roll(&self, slot: usize) -> Option<Roll> {
        self.rolls().get(slot).copied()
    }

    /// Returns the first roll of the frame.
    #[must_use]
    pub fn first(&self) -> Roll {
        self.rolls()[0]
    }

    /// Returns the second roll of the frame.
    #[must_use]
    pub fn second(&self) -> Roll {
        self.rolls()[1]
    }

    /// Returns true if `slot` exists and holds a value.
    #[must_use]
    pub fn is_filled(&self, slot: usize) -> bool {
        self.roll(slot).is_some_and(Roll::is_recorded)
    }

    /// Returns true if the first roll was a strike.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.first().is_strike()
    }

    /// Returns true if the second roll completed a spare.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        self.second().is_spare()
    }

    /// Returns true if a tenth frame has earned its third (bonus) roll.
    ///
    /// Always false for regular frames, which never carry bonus rolls.
    #[must_use]
    pub fn earns_bonus_roll(&self) -> bool {
        self.is_tenth() && (self.is_strike() || self.is_spare())
    }

    /// Returns true once no further roll may be recorded in this frame.
    ///
    /// - Regular frame: after a strike, or once both slots are filled.
    /// - Tenth frame: once both slots are filled, plus the third if a strike or
    ///   spare earned it.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Regular([first, second]) => first.is_strike() || second.is_recorded(),
            Self::Tenth([first, second, third]) => {
                first.is_recorded()
                    && second.is_recorded()
                    && (third.is_recorded() || !self.earns_bonus_roll())
            }
        }
    }

    /// Returns a copy of this frame with `roll` written into `slot`.
    ///
    /// When the second slot is written with a pin count that, added to a
    /// non-strike first roll, makes exactly ten, the spare marker is stored in
    /// its place. A `slot` outside the frame leaves it unchanged.
    #[must_use]
    pub fn with_roll(mut self, slot: usize, roll: Roll) -> Self {
        let roll = self.normalize(slot, roll);
        if let Some(target) = self.rolls_mut().get_mut(slot) {
            *target = roll;
        }
        self
    }

    fn normalize(&self, slot: usize, roll: Roll) -> Roll {
        match (slot, self.first(), roll) {
            (1, Roll::Pins(first), Roll::Pins(second))
                if first < PIN_COUNT && first.checked_add(second) == Some(PIN_COUNT) =>
            {
                Roll::Spare
            }
            _ => roll,
        }
    }

    /// Returns the score-sheet marks for each slot (see [`Roll`]'s `Display`).
    ///
    /// Bonus strikes in the tenth frame render as `X` like any other strike.
    #[must_use]
    pub fn marks(&self) -> Vec<String> {
        self.rolls().iter().map(ToString::to_string).collect()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::regular()
    }
}

/// Creates a sheet of nine empty regular frames followed by an empty tenth.
#[must_use]
pub fn create_empty_frames() -> Frames {
    std::array::from_fn(Frame::empty_at)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod roll_tests {
        use super::*;

        #[test]
        fn strike_is_ten_pins() {
            assert!(Roll::STRIKE.is_strike());
            assert!(Roll::Pins(10).is_strike());
            assert!(!Roll::Pins(9).is_strike());
            assert!(!Roll::Spare.is_strike());
        }

        #[test]
        fn display_uses_sheet_symbols() {
            assert_eq!(Roll::STRIKE.to_string(), "X");
            assert_eq!(Roll::Spare.to_string(), "/");
            assert_eq!(Roll::Pins(0).to_string(), "-");
            assert_eq!(Roll::Pins(7).to_string(), "7");
            assert_eq!(Roll::Unrecorded.to_string(), "");
        }

        #[test]
        fn default_is_unrecorded() {
            assert_eq!(Roll::default(), Roll::Unrecorded);
            assert!(!Roll::default().is_recorded());
        }
    }

    mod frame_tests {
        use super::*;

        #[test]
        fn empty_sheet_shape() {
            let frames = create_empty_frames();
            assert_eq!(frames.len(), FRAME_COUNT);
            for frame in &frames[..TENTH_FRAME] {
                assert_eq!(frame.slot_count(), 2);
                assert!(!frame.is_tenth());
            }
            assert_eq!(frames[TENTH_FRAME].slot_count(), 3);
            assert!(frames
                .iter()
                .flat_map(Frame::rolls)
                .all(|roll| *roll == Roll::Unrecorded));
        }

        #[test]
        fn second_roll_making_ten_is_stored_as_spare() {
            let frame = Frame::regular()
                .with_roll(0, Roll::Pins(7))
                .with_roll(1, Roll::Pins(3));
            assert_eq!(frame.rolls(), &[Roll::Pins(7), Roll::Spare]);
        }

        #[test]
        fn gutter_then_ten_is_a_spare() {
            let frame = Frame::regular()
                .with_roll(0, Roll::Pins(0))
                .with_roll(1, Roll::Pins(10));
            assert_eq!(frame.second(), Roll::Spare);
        }

        #[test]
        fn open_frame_keeps_raw_pins() {
            let frame = Frame::regular()
                .with_roll(0, Roll::Pins(4))
                .with_roll(1, Roll::Pins(5));
            assert_eq!(frame.rolls(), &[Roll::Pins(4), Roll::Pins(5)]);
            assert!(frame.is_complete());
        }

        #[test]
        fn tenth_frame_spare_is_normalized() {
            let frame = Frame::tenth()
                .with_roll(0, Roll::Pins(6))
                .with_roll(1, Roll::Pins(4));
            assert_eq!(frame.second(), Roll::Spare);
            assert!(frame.earns_bonus_roll());
            assert!(!frame.is_complete());
        }

        #[test]
        fn tenth_frame_strikes_stay_raw() {
            let frame = Frame::tenth()
                .with_roll(0, Roll::STRIKE)
                .with_roll(1, Roll::STRIKE)
                .with_roll(2, Roll::STRIKE);
            assert_eq!(frame.rolls(), &[Roll::STRIKE; 3]);
            assert_eq!(frame.marks(), vec!["X", "X", "X"]);
        }

        #[test]
        fn out_of_range_slot_is_ignored() {
            let frame = Frame::regular().with_roll(2, Roll::Pins(3));
            assert_eq!(frame, Frame::regular());
            assert_eq!(frame.roll(2), None);
        }

        #[test]
        fn regular_strike_completes_frame() {
            let frame = Frame::regular().with_roll(0, Roll::STRIKE);
            assert!(frame.is_complete());
            assert!(!frame.is_filled(1));
            assert!(!frame.earns_bonus_roll());
        }

        #[test]
        fn tenth_open_frame_completes_after_two() {
            let frame = Frame::tenth()
                .with_roll(0, Roll::Pins(3))
                .with_roll(1, Roll::Pins(4));
            assert!(!frame.earns_bonus_roll());
            assert!(frame.is_complete());
        }

        #[test]
        fn tenth_strike_needs_both_bonus_rolls() {
            let frame = Frame::tenth().with_roll(0, Roll::STRIKE);
            assert!(!frame.is_complete());
            let frame = frame.with_roll(1, Roll::Pins(3));
            assert!(!frame.is_complete());
            let frame = frame.with_roll(2, Roll::Pins(5));
            assert!(frame.is_complete());
        }

        #[test]
        fn marks_render_each_slot() {
            let frame = Frame::regular()
                .with_roll(0, Roll::Pins(0))
                .with_roll(1, Roll::Pins(10));
            assert_eq!(frame.marks(), vec!["-", "/"]);
        }

        #[test]
        fn frame_round_trips_through_json() {
            let frame = Frame::tenth()
                .with_roll(0, Roll::Pins(8))
                .with_roll(1, Roll::Pins(2))
                .with_roll(2, Roll::STRIKE);
            let json = serde_json::to_string(&frame).unwrap();
            let back: Frame = serde_json::from_str(&json).unwrap();
            assert_eq!(frame, back);
        }
    }
}
