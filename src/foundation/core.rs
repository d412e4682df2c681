use crate::foundation::error::{BoardError, BoardResult};

pub use kurbo::{Point, Vec2};

/// Milliseconds since the start of an animation.
pub type TimestampMs = u64;

/// Sampling frequency in frames per second.
///
/// Unlike a video frame rate this may be fractional; timestamps derived from it are rounded to
/// whole milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SampleRate(f64);

impl SampleRate {
    /// Rate used by the tactics board when nothing else is configured.
    pub const DEFAULT_HZ: f64 = 20.0;

    /// Create a validated rate. Must be finite and `> 0`.
    pub fn new(hz: f64) -> BoardResult<Self> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(BoardError::invalid_input(format!(
                "sample rate must be a positive number of Hz, got {hz}"
            )));
        }
        Ok(Self(hz))
    }

    /// Rate in Hz.
    pub fn hz(self) -> f64 {
        self.0
    }

    /// Duration of one sample in milliseconds.
    pub fn interval_ms(self) -> f64 {
        1000.0 / self.0
    }

    /// Number of sample intervals covering `duration_ms`, rounded to the nearest whole interval.
    pub fn intervals_in(self, duration_ms: u64) -> u64 {
        ((duration_ms as f64) / 1000.0 * self.0).round().max(0.0) as u64
    }

    /// Timestamp of sample `index`, relative to the first sample.
    pub fn timestamp_of(self, index: u64) -> TimestampMs {
        ((index as f64) * self.interval_ms()).round() as u64
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self(Self::DEFAULT_HZ)
    }
}

/// Playable area of the board in board-space units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoardBounds {
    /// Board width.
    pub width: f64,
    /// Board height.
    pub height: f64,
    /// Distance from each edge that dragged tokens are kept inside.
    pub margin: f64,
}

impl BoardBounds {
    /// Validate that the margin leaves a non-empty playable area.
    pub fn validate(&self) -> BoardResult<()> {
        let ok = self.width.is_finite()
            && self.height.is_finite()
            && self.margin >= 0.0
            && self.width > 2.0 * self.margin
            && self.height > 2.0 * self.margin;
        if !ok {
            return Err(BoardError::invalid_input(format!(
                "board bounds {}x{} with margin {} leave no playable area",
                self.width, self.height, self.margin
            )));
        }
        Ok(())
    }

    /// Centre of the board.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp `p` into `[margin, size - margin]` on both axes.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.margin, self.width - self.margin),
            p.y.clamp(self.margin, self.height - self.margin),
        )
    }
}

impl Default for BoardBounds {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin: 10.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
