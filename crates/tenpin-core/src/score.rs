//! Score calculation over a player's sheet.
//!
//! Scores are always recomputed from the recorded frames; nothing is patched
//! incrementally. With ten fixed-size frames this is a constant amount of work.
//!
//! # Scoring rule
//!
//! This engine does not carry strike/spare bonuses across frames:
//!
//! - Frames 1 through 9 score exactly the pins recorded in them. A strike scores
//!   10, a spare scores 10, an open frame scores its two rolls.
//! - The tenth frame scores its first two rolls, plus the third roll when the
//!   frame opened with a strike, the second roll was a spare, or the second roll
//!   was itself a strike.
//!
//! A perfect game (twelve strikes) therefore scores `9 * 10 + 30 = 120`.
//!
//! # Example
//!
//! ```
//! use tenpin_core::frame::{create_empty_frames, Roll};
//! use tenpin_core::score::calculate_score;
//!
//! let mut frames = create_empty_frames();
//! frames[0] = frames[0].with_roll(0, Roll::Pins(7)).with_roll(1, Roll::Pins(3));
//! frames[1] = frames[1].with_roll(0, Roll::STRIKE);
//!
//! assert_eq!(calculate_score(&frames), 20);
//! ```

use crate::frame::{Frame, Frames, Roll, FRAME_COUNT, PIN_COUNT};

/// Returns the points a single frame contributes to the total.
#[must_use]
pub fn frame_score(frame: &Frame) -> u32 {
    let first = frame.first().pins_or_zero();
    let second = match frame.second() {
        Roll::Spare => PIN_COUNT.saturating_sub(first),
        roll => roll.pins_or_zero(),
    };

    let mut score = u32::from(first) + u32::from(second);

    if let Frame::Tenth([opening, middle, bonus]) = frame {
        if opening.is_strike() || middle.is_spare() || middle.is_strike() {
            score += u32::from(bonus.pins_or_zero());
        }
    }

    score
}

/// Returns the total score of a player's sheet.
#[must_use]
pub fn calculate_score(frames: &Frames) -> u32 {
    frames.iter().map(frame_score).sum()
}

/// Returns the running total after each frame.
///
/// The last element always equals [`calculate_score`] for the same sheet.
#[must_use]
pub fn frame_scores(frames: &Frames) -> [u32; FRAME_COUNT] {
    let mut running = 0;
    std::array::from_fn(|index| {
        running += frame_score(&frames[index]);
        running
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{create_empty_frames, TENTH_FRAME};

    fn sheet(rolls: &[(usize, usize, u8)]) -> Frames {
        let mut frames = create_empty_frames();
        for &(frame, slot, pins) in rolls {
            frames[frame] = frames[frame].with_roll(slot, Roll::Pins(pins));
        }
        frames
    }

    mod frame_score_tests {
        use super::*;

        #[test]
        fn empty_frame_scores_zero() {
            assert_eq!(frame_score(&Frame::regular()), 0);
            assert_eq!(frame_score(&Frame::tenth()), 0);
        }

        #[test]
        fn open_frame_scores_its_pins() {
            let frame = Frame::regular()
                .with_roll(0, Roll::Pins(4))
                .with_roll(1, Roll::Pins(3));
            assert_eq!(frame_score(&frame), 7);
        }

        #[test]
        fn spare_scores_ten() {
            let frame = Frame::regular()
                .with_roll(0, Roll::Pins(7))
                .with_roll(1, Roll::Pins(3));
            assert_eq!(frame.second(), Roll::Spare);
            assert_eq!(frame_score(&frame), 10);
        }

        #[test]
        fn strike_scores_ten_without_bonus() {
            let frame = Frame::regular().with_roll(0, Roll::STRIKE);
            assert_eq!(frame_score(&frame), 10);
        }

        #[test]
        fn first_roll_alone_counts() {
            let frame = Frame::regular().with_roll(0, Roll::Pins(6));
            assert_eq!(frame_score(&frame), 6);
        }

        #[test]
        fn tenth_frame_open_ignores_third_slot() {
            // Never recorded through the engine, but the rule must not count it.
            let frame = Frame::Tenth([Roll::Pins(3), Roll::Pins(4), Roll::Pins(9)]);
            assert_eq!(frame_score(&frame), 7);
        }

        #[test]
        fn tenth_frame_spare_counts_bonus() {
            let frame = Frame::tenth()
                .with_roll(0, Roll::Pins(8))
                .with_roll(1, Roll::Pins(2))
                .with_roll(2, Roll::Pins(6));
            assert_eq!(frame_score(&frame), 16);
        }

        #[test]
        fn tenth_frame_strike_counts_both_bonus_rolls() {
            let frame = Frame::tenth()
                .with_roll(0, Roll::STRIKE)
                .with_roll(1, Roll::Pins(3))
                .with_roll(2, Roll::Pins(4));
            assert_eq!(frame_score(&frame), 17);
        }

        #[test]
        fn tenth_frame_turkey_scores_thirty() {
            let frame = Frame::Tenth([Roll::STRIKE; 3]);
            assert_eq!(frame_score(&frame), 30);
        }
    }

    mod sheet_tests {
        use super::*;

        #[test]
        fn perfect_game_scores_one_twenty() {
            let mut frames = create_empty_frames();
            for frame in frames.iter_mut().take(TENTH_FRAME) {
                *frame = frame.with_roll(0, Roll::STRIKE);
            }
            frames[TENTH_FRAME] = Frame::Tenth([Roll::STRIKE; 3]);
            assert_eq!(calculate_score(&frames), 120);
        }

        #[test]
        fn all_gutters_score_zero() {
            let rolls: Vec<_> = (0..FRAME_COUNT)
                .flat_map(|frame| [(frame, 0, 0), (frame, 1, 0)])
                .collect();
            assert_eq!(calculate_score(&sheet(&rolls)), 0);
        }

        #[test]
        fn all_nines_score_ninety() {
            let rolls: Vec<_> = (0..FRAME_COUNT)
                .flat_map(|frame| [(frame, 0, 9), (frame, 1, 0)])
                .collect();
            assert_eq!(calculate_score(&sheet(&rolls)), 90);
        }

        #[test]
        fn running_scores_accumulate() {
            let frames = sheet(&[(0, 0, 7), (0, 1, 3), (1, 0, 10), (2, 0, 2), (2, 1, 5)]);
            let running = frame_scores(&frames);
            assert_eq!(&running[..3], &[10, 20, 27]);
            assert!(running[3..].iter().all(|&score| score == 27));
            assert_eq!(running[FRAME_COUNT - 1], calculate_score(&frames));
        }

        #[test]
        fn score_depends_only_on_frames() {
            let frames = sheet(&[(0, 0, 3), (0, 1, 6), (9, 0, 10), (9, 1, 10), (9, 2, 4)]);
            let copy = frames;
            let first = calculate_score(&frames);
            let second = calculate_score(&copy);
            assert_eq!(first, second);
            assert_eq!(first, 9 + 24);
        }
    }
}
