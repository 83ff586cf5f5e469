//! Players and their score sheets.

use serde::{Deserialize, Serialize};

use crate::frame::{create_empty_frames, Frame, Frames, FRAME_COUNT, TENTH_FRAME};
use crate::score::{calculate_score, frame_scores};

/// A bowler: a name, ten frames, and the total derived from them.
///
/// The total is recomputed from the frames after every change and never
/// patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    frames: Frames,
    total_score: u32,
}

impl Player {
    /// Creates a player with an empty sheet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: create_empty_frames(),
            total_score: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's frames.
    #[must_use]
    pub fn frames(&self) -> &Frames {
        &self.frames
    }

    /// Returns the frame at `index`, if any.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Returns the total score of the sheet.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Returns the running total after each frame.
    #[must_use]
    pub fn running_scores(&self) -> [u32; FRAME_COUNT] {
        frame_scores(&self.frames)
    }

    /// Returns true once every frame, including the tenth, is complete.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frames.iter().all(Frame::is_complete)
    }

    /// Returns true once frames 1 through 9 are complete.
    #[must_use]
    pub fn reached_tenth(&self) -> bool {
        self.frames[..TENTH_FRAME].iter().all(Frame::is_complete)
    }

    /// Replaces the frame at `index` and recomputes the total.
    pub(crate) fn replace_frame(&mut self, index: usize, frame: Frame) {
        if let Some(slot) = self.frames.get_mut(index) {
            *slot = frame;
            self.total_score = calculate_score(&self.frames);
        }
    }

    /// Clears every frame, keeping the name.
    pub(crate) fn clear(&mut self) {
        self.frames = create_empty_frames();
        self.total_score = 0;
    }
}
