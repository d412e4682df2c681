use tracing::{debug, info, warn};

use crate::foundation::core::{Point, TimestampMs};
use crate::foundation::error::{BoardError, BoardResult};
use crate::live::clock::{Clock, MonotonicClock};
use crate::live::scene::Scene;
use crate::model::frame::{Frame, validate_animation};

/// Recorder/player mode. Recording and playing are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardState {
    /// Neither sampling nor playing.
    Idle,
    /// Sampling the scene on every tick.
    Recording,
    /// Driving the scene from the frame buffer on every tick.
    Playing,
}

/// What a single [`LiveBoard::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Board was idle; nothing happened.
    Idle,
    /// A frame was appended to the take.
    Recorded {
        /// Timestamp of the new frame.
        timestamp: TimestampMs,
    },
    /// Frame `index` was applied to the scene; more frames follow.
    Applied {
        /// Index of the applied frame.
        index: usize,
    },
    /// Frame `index`, the last one, was applied and playback stopped.
    Finished {
        /// Index of the applied frame.
        index: usize,
    },
}

/// Playback progress for progress UIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Index of the frame most recently applied.
    pub index: usize,
    /// Frames in the buffer.
    pub total: usize,
}

/// Single-owner recorder/player bound to one scene.
///
/// `tick` is the only time-driven operation; whoever owns the board calls it at a fixed interval
/// (see [`crate::BoardDriver`]). Each tick reads the scene as it is at that moment.
#[derive(Debug)]
pub struct LiveBoard<C = MonotonicClock> {
    scene: Scene,
    frames: Vec<Frame>,
    state: BoardState,
    recording_started_at: u64,
    cursor: usize,
    playback_index: usize,
    clock: C,
}

impl LiveBoard<MonotonicClock> {
    /// Board over `scene` timed by the wall clock.
    pub fn new(scene: Scene) -> Self {
        Self::with_clock(scene, MonotonicClock::default())
    }
}

impl<C: Clock> LiveBoard<C> {
    /// Board over `scene` timed by `clock`.
    pub fn with_clock(scene: Scene, clock: C) -> Self {
        Self {
            scene,
            frames: Vec::new(),
            state: BoardState::Idle,
            recording_started_at: 0,
            cursor: 0,
            playback_index: 0,
            clock,
        }
    }

    /// Current mode.
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Live scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Recorded or loaded frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Index of the frame most recently applied during playback.
    pub fn playback_index(&self) -> usize {
        self.playback_index
    }

    /// Playback position over the whole buffer.
    pub fn progress(&self) -> Progress {
        Progress {
            index: self.playback_index,
            total: self.frames.len(),
        }
    }

    /// Begin a new take: clears the buffer, captures the scene at timestamp 0.
    pub fn start_recording(&mut self) -> BoardResult<()> {
        match self.state {
            BoardState::Idle => {}
            BoardState::Recording => return Err(self.reject("already recording")),
            BoardState::Playing => return Err(self.reject("cannot record during playback")),
        }
        self.frames.clear();
        self.frames.push(Frame::new(0, self.scene.snapshot()));
        self.recording_started_at = self.clock.now_ms();
        self.state = BoardState::Recording;
        info!("recording started");
        Ok(())
    }

    /// End the take. Returns `true` if a recording was running.
    pub fn stop_recording(&mut self) -> bool {
        if self.state != BoardState::Recording {
            return false;
        }
        self.state = BoardState::Idle;
        info!(frames = self.frames.len(), "recording stopped");
        true
    }

    /// Start playing the buffer from the first frame.
    pub fn play(&mut self) -> BoardResult<()> {
        match self.state {
            BoardState::Idle => {}
            BoardState::Recording => return Err(self.reject("cannot play while recording")),
            BoardState::Playing => return Err(self.reject("already playing")),
        }
        if self.frames.is_empty() {
            return Err(BoardError::invalid_input("nothing to play: no frames"));
        }
        self.cursor = 0;
        self.playback_index = 0;
        self.state = BoardState::Playing;
        info!(frames = self.frames.len(), "playback started");
        Ok(())
    }

    /// Halt playback, leaving the scene at the last applied frame. Returns `true` if playback
    /// was running.
    pub fn stop_playback(&mut self) -> bool {
        if self.state != BoardState::Playing {
            return false;
        }
        self.state = BoardState::Idle;
        info!(index = self.playback_index, "playback stopped");
        true
    }

    /// Stop whatever is running. Harmless when idle.
    pub fn stop(&mut self) -> bool {
        self.stop_recording() || self.stop_playback()
    }

    /// Discard the take and return to idle from any state.
    pub fn reset(&mut self) {
        self.state = BoardState::Idle;
        self.frames.clear();
        self.cursor = 0;
        self.playback_index = 0;
        debug!("board reset");
    }

    /// Replace the buffer with stored or generated frames and show the first one.
    pub fn load_frames(&mut self, frames: Vec<Frame>) -> BoardResult<()> {
        if self.state != BoardState::Idle {
            return Err(self.reject("cannot load frames while recording or playing"));
        }
        validate_animation(&frames)?;
        self.scene.apply_frame(&frames[0]);
        self.frames = frames;
        self.cursor = 0;
        self.playback_index = 0;
        debug!(frames = self.frames.len(), "frames loaded");
        Ok(())
    }

    /// Drag a token. Allowed while idle or recording, never during playback.
    pub fn move_token(&mut self, id: &str, to: Point) -> BoardResult<Point> {
        if self.state == BoardState::Playing {
            return Err(self.reject("tokens cannot be moved during playback"));
        }
        self.scene.move_token(id, to)
    }

    /// One fixed-interval step.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            BoardState::Idle => TickOutcome::Idle,
            BoardState::Recording => {
                let timestamp = self
                    .clock
                    .now_ms()
                    .saturating_sub(self.recording_started_at);
                self.frames.push(Frame::new(timestamp, self.scene.snapshot()));
                TickOutcome::Recorded { timestamp }
            }
            BoardState::Playing => {
                let index = self.cursor;
                let Some(frame) = self.frames.get(index) else {
                    self.state = BoardState::Idle;
                    return TickOutcome::Finished {
                        index: self.playback_index,
                    };
                };
                self.scene.apply_frame(frame);
                self.playback_index = index;
                self.cursor += 1;
                if self.cursor >= self.frames.len() {
                    self.state = BoardState::Idle;
                    info!(index, "playback finished");
                    TickOutcome::Finished { index }
                } else {
                    TickOutcome::Applied { index }
                }
            }
        }
    }

    /// Take the buffer out of the board, leaving it empty. Only while idle.
    pub fn take_frames(&mut self) -> BoardResult<Vec<Frame>> {
        if self.state != BoardState::Idle {
            return Err(self.reject("cannot take frames while recording or playing"));
        }
        self.cursor = 0;
        self.playback_index = 0;
        Ok(std::mem::take(&mut self.frames))
    }

    fn reject(&self, msg: &str) -> BoardError {
        warn!(state = ?self.state, "{msg}");
        BoardError::state_conflict(msg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/live/board.rs"]
mod tests;
