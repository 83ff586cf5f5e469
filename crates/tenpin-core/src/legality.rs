//! Roll legality: which pin counts a slot may accept.
//!
//! The resolver only looks at the frame being written. Whose turn it is, and
//! whether the slot is reachable at all, is the turn cursor's concern
//! (see [`crate::turn`]).
//!
//! | Slot                    | Legal pins                                   |
//! |-------------------------|----------------------------------------------|
//! | first roll, any frame   | `0..=10`                                     |
//! | second roll             | `0..=10` after a strike, else `0..=10 - first` |
//! | tenth frame, third roll | `0..=10`                                     |

use std::ops::RangeInclusive;

use crate::frame::{Frame, PIN_COUNT};

/// Returns the range of pin counts that may be recorded in `slot` of `frame`.
///
/// Returns `None` if `frame` has no such slot.
///
/// # Example
///
/// ```
/// use tenpin_core::frame::{Frame, Roll};
/// use tenpin_core::legality::legal_pins;
///
/// let frame = Frame::regular().with_roll(0, Roll::Pins(7));
/// assert_eq!(legal_pins(&frame, 1), Some(0..=3));
/// assert_eq!(legal_pins(&frame, 2), None);
/// ```
#[must_use]
pub fn legal_pins(frame: &Frame, slot: usize) -> Option<RangeInclusive<u8>> {
    if slot >= frame.slot_count() {
        return None;
    }

    let max = match (slot, frame.first()) {
        (1, first) if !first.is_strike() => PIN_COUNT.saturating_sub(first.pins_or_zero()),
        _ => PIN_COUNT,
    };

    Some(0..=max)
}

/// Returns the legal pin counts for `slot` of `frame`, in ascending order.
///
/// Empty if `frame` has no such slot.
#[must_use]
pub fn available_scores(frame: &Frame, slot: usize) -> Vec<u8> {
    legal_pins(frame, slot).map(Iterator::collect).unwrap_or_default()
}

/// Returns true if `pins` may be recorded in `slot` of `frame`.
#[must_use]
pub fn is_legal(frame: &Frame, slot: usize, pins: u8) -> bool {
    legal_pins(frame, slot).is_some_and(|range| range.contains(&pins))
}

// =============================================================================
// Tests
// =============================================================================
