use crate::foundation::core::TimestampMs;
use crate::foundation::error::{BoardError, BoardResult};
use crate::model::token::{Pose, Token, duplicate_id};

/// One timestamped, fully resolved board state: the unit of playback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Complete board state at this instant.
    pub tokens: Vec<Token>,
    /// Milliseconds since the start of the animation.
    pub timestamp: TimestampMs,
}

impl Frame {
    /// Build a frame.
    pub fn new(timestamp: TimestampMs, tokens: Vec<Token>) -> Self {
        Self { tokens, timestamp }
    }

    /// Snapshot a pose at `timestamp`.
    pub fn from_pose(pose: &Pose, timestamp: TimestampMs) -> Self {
        Self::new(timestamp, pose.tokens().to_vec())
    }

    /// The board state of this frame as a pose.
    pub fn to_pose(&self) -> Pose {
        Pose::new(self.tokens.clone())
    }

    /// Copy shifted later by `offset` milliseconds.
    pub fn shifted(mut self, offset: TimestampMs) -> Self {
        self.timestamp = self.timestamp.saturating_add(offset);
        self
    }
}

/// An ordered frame sequence, as produced by the animator or the recorder.
pub type Animation = Vec<Frame>;

/// Check a frame sequence coming from outside the engine.
///
/// Requires at least one frame, unique token ids per frame and non-decreasing timestamps.
pub fn validate_animation(frames: &[Frame]) -> BoardResult<()> {
    if frames.is_empty() {
        return Err(BoardError::invalid_input("animation has no frames"));
    }
    for (i, f) in frames.iter().enumerate() {
        if let Some(id) = duplicate_id(&f.tokens) {
            return Err(BoardError::invalid_input(format!(
                "duplicate token id '{id}' in frame {i}"
            )));
        }
    }
    if let Some(i) = frames
        .windows(2)
        .position(|w| w[1].timestamp < w[0].timestamp)
    {
        return Err(BoardError::invalid_input(format!(
            "frame timestamps must be non-decreasing (frame {} at {} ms after {} ms)",
            i + 1,
            frames[i + 1].timestamp,
            frames[i].timestamp
        )));
    }
    Ok(())
}

/// Total span covered by a frame sequence, in milliseconds.
pub fn animation_duration_ms(frames: &[Frame]) -> TimestampMs {
    match (frames.first(), frames.last()) {
        (Some(a), Some(b)) => b.timestamp.saturating_sub(a.timestamp),
        _ => 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/frame.rs"]
mod tests;
