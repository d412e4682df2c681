use std::collections::HashMap;

use tracing::debug;

use crate::animation::lerp::Lerp;
use crate::foundation::core::SampleRate;
use crate::foundation::error::{BoardError, BoardResult};
use crate::model::frame::Frame;
use crate::model::token::{Pose, Token};

/// Interpolate one segment between two poses.
///
/// Produces `round(duration_ms / 1000 * rate) + 1` frames, both endpoints included, so that
/// consecutive segments share a boundary frame. Timestamps are relative to the segment start.
///
/// Frames carry exactly the start pose's tokens. A start-only token stays where it started; an
/// end-only token is left out until a later segment starts from a pose containing it.
pub fn interpolate_segment(
    start: &Pose,
    end: &Pose,
    duration_ms: u64,
    rate: SampleRate,
) -> BoardResult<Vec<Frame>> {
    start
        .validate()
        .map_err(|e| BoardError::invalid_input(format!("segment start: {}", inner_msg(e))))?;
    end.validate()
        .map_err(|e| BoardError::invalid_input(format!("segment end: {}", inner_msg(e))))?;
    if duration_ms == 0 {
        return Err(BoardError::invalid_input("segment duration must be > 0 ms"));
    }
    let frame_count = rate.intervals_in(duration_ms);
    if frame_count == 0 {
        return Err(BoardError::invalid_input(format!(
            "segment of {duration_ms} ms is shorter than half a sample at {} Hz",
            rate.hz()
        )));
    }

    let pairs = pair_tokens(start, end);
    let frames = (0..=frame_count)
        .map(|i| {
            let t = i as f64 / frame_count as f64;
            let tokens = pairs.iter().map(|(a, b)| Token::lerp(a, b, t)).collect();
            Frame::new(rate.timestamp_of(i), tokens)
        })
        .collect();
    Ok(frames)
}

/// Chain `poses` into one continuous animation at the default 20 Hz.
pub fn chain_animation(poses: &[Pose], step_duration_ms: u64) -> BoardResult<Vec<Frame>> {
    chain_animation_at(poses, step_duration_ms, SampleRate::default())
}

/// Chain `poses` into one continuous animation.
///
/// Every consecutive pair becomes a segment of `step_duration_ms`. Segment `i` is offset by
/// `i * step_duration_ms` and, after the first, loses its leading frame (identical to the
/// previous segment's last one).
#[tracing::instrument(skip(poses), fields(poses = poses.len()))]
pub fn chain_animation_at(
    poses: &[Pose],
    step_duration_ms: u64,
    rate: SampleRate,
) -> BoardResult<Vec<Frame>> {
    if poses.len() < 2 {
        return Err(BoardError::invalid_input(format!(
            "an animation needs at least 2 poses, got {}",
            poses.len()
        )));
    }

    let mut out = Vec::new();
    for (i, pair) in poses.windows(2).enumerate() {
        let offset = step_duration_ms.saturating_mul(i as u64);
        let segment = interpolate_segment(&pair[0], &pair[1], step_duration_ms, rate)
            .map_err(|e| BoardError::invalid_input(format!("pose {i}: {}", inner_msg(e))))?;
        let skip = usize::from(i > 0);
        out.extend(segment.into_iter().skip(skip).map(|f| f.shifted(offset)));
    }

    debug!(frames = out.len(), "chained animation");
    Ok(out)
}

fn pair_tokens<'a>(start: &'a Pose, end: &'a Pose) -> Vec<(&'a Token, &'a Token)> {
    let end_by_id: HashMap<&str, &Token> =
        end.tokens().iter().map(|t| (t.id.as_str(), t)).collect();

    start
        .tokens()
        .iter()
        .map(|a| (a, end_by_id.get(a.id.as_str()).copied().unwrap_or(a)))
        .collect()
}

fn inner_msg(e: BoardError) -> String {
    match e {
        BoardError::InvalidInput(msg) => msg,
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
