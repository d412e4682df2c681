use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::foundation::core::Point;
use crate::foundation::error::{BoardError, BoardResult};
use crate::live::board::{BoardState, LiveBoard, Progress, TickOutcome};
use crate::live::clock::{Clock, MonotonicClock};
use crate::live::ticker::Ticker;
use crate::model::frame::Frame;

/// Real-time owner of one [`LiveBoard`].
///
/// The board sits behind a single mutex; user edits and timer ticks are serialized through it.
/// At most one [`Ticker`] exists per driver, started by `start_recording`/`play` and cancelled
/// by `stop`/`reset` or when playback reaches the last frame.
pub struct BoardDriver<C: Clock = MonotonicClock> {
    board: Arc<Mutex<LiveBoard<C>>>,
    ticker: Option<Ticker>,
    interval: Duration,
}

impl<C: Clock> BoardDriver<C> {
    /// Driver ticking `board` every `interval`.
    pub fn new(board: LiveBoard<C>, interval: Duration) -> BoardResult<Self> {
        if interval.is_zero() {
            return Err(BoardError::invalid_input("tick interval must be > 0"));
        }
        Ok(Self {
            board: Arc::new(Mutex::new(board)),
            ticker: None,
            interval,
        })
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Begin a take and start sampling.
    pub fn start_recording(&mut self) -> BoardResult<()> {
        self.lock()?.start_recording()?;
        self.spawn_ticker()
    }

    /// Start playing the loaded or recorded frames.
    pub fn play(&mut self) -> BoardResult<()> {
        self.lock()?.play()?;
        self.spawn_ticker()
    }

    /// Stop recording or playback. Harmless when idle.
    pub fn stop(&mut self) -> BoardResult<()> {
        self.cancel_ticker();
        self.lock()?.stop();
        Ok(())
    }

    /// Stop and discard the take.
    pub fn reset(&mut self) -> BoardResult<()> {
        self.cancel_ticker();
        self.lock()?.reset();
        Ok(())
    }

    /// Load stored or generated frames; see [`LiveBoard::load_frames`].
    pub fn load_frames(&mut self, frames: Vec<Frame>) -> BoardResult<()> {
        self.lock()?.load_frames(frames)
    }

    /// Drag a token; see [`LiveBoard::move_token`].
    pub fn move_token(&self, id: &str, to: Point) -> BoardResult<Point> {
        self.lock()?.move_token(id, to)
    }

    /// Current mode.
    pub fn state(&self) -> BoardResult<BoardState> {
        Ok(self.lock()?.state())
    }

    /// Playback progress.
    pub fn progress(&self) -> BoardResult<Progress> {
        Ok(self.lock()?.progress())
    }

    /// Copy of the frame buffer.
    pub fn frames(&self) -> BoardResult<Vec<Frame>> {
        Ok(self.lock()?.frames().to_vec())
    }

    /// Run `f` with exclusive access to the board.
    pub fn with_board<R>(&self, f: impl FnOnce(&mut LiveBoard<C>) -> R) -> BoardResult<R> {
        let mut board = self.lock()?;
        Ok(f(&mut board))
    }

    /// Block until the board is idle or `timeout` passes. Returns `true` when idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> BoardResult<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.state()? == BoardState::Idle {
                self.cancel_ticker();
                return Ok(true);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(false);
            }
            std::thread::sleep(self.interval.min(deadline - now));
        }
    }

    fn spawn_ticker(&mut self) -> BoardResult<()> {
        self.cancel_ticker();
        let board = Arc::clone(&self.board);
        let ticker = Ticker::spawn(self.interval, move || {
            let Ok(mut board) = board.lock() else {
                tracing::error!("live board lock poisoned; stopping ticker");
                return ControlFlow::Break(());
            };
            match board.tick() {
                TickOutcome::Recorded { .. } | TickOutcome::Applied { .. } => {
                    ControlFlow::Continue(())
                }
                TickOutcome::Idle | TickOutcome::Finished { .. } => ControlFlow::Break(()),
            }
        });
        match ticker {
            Ok(t) => {
                self.ticker = Some(t);
                Ok(())
            }
            Err(e) => {
                // Without a timer the board must not stay in a running state.
                self.lock()?.stop();
                Err(e)
            }
        }
    }

    fn cancel_ticker(&mut self) {
        if let Some(mut t) = self.ticker.take() {
            t.cancel();
        }
    }

    fn lock(&self) -> BoardResult<MutexGuard<'_, LiveBoard<C>>> {
        self.board
            .lock()
            .map_err(|_| BoardError::Other(anyhow::anyhow!("live board lock poisoned")))
    }
}

impl<C: Clock> Drop for BoardDriver<C> {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}

impl<C: Clock> std::fmt::Debug for BoardDriver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardDriver")
            .field("interval", &self.interval)
            .field("ticking", &self.ticker.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/live/driver.rs"]
mod tests;
