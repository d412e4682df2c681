use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::foundation::error::{BoardError, BoardResult};

/// Owned fixed-period timer running a callback on a worker thread.
///
/// Ticks never overlap. When a callback overruns, the missed periods are dropped and the next
/// tick lands on the next aligned deadline. The timer stops when the callback returns
/// [`ControlFlow::Break`], on [`Ticker::cancel`], or when the handle is dropped.
#[derive(Debug)]
pub struct Ticker {
    stop: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking every `period`; the first tick fires one period from now.
    pub fn spawn<F>(period: Duration, on_tick: F) -> BoardResult<Self>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        if period.is_zero() {
            return Err(BoardError::invalid_input("tick period must be > 0"));
        }
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = std::thread::Builder::new()
            .name("pitchboard-ticker".to_owned())
            .spawn(move || run(period, &stop_rx, on_tick))
            .map_err(|e| BoardError::Other(anyhow::Error::new(e).context("spawn ticker thread")))?;
        Ok(Self {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Stop the timer and wait for an in-flight tick to finish. Idempotent.
    pub fn cancel(&mut self) {
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("ticker callback panicked");
            }
        }
    }

    /// Return `true` once the timer thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run<F>(period: Duration, stop: &mpsc::Receiver<()>, mut on_tick: F)
where
    F: FnMut() -> ControlFlow<()>,
{
    let mut deadline = Instant::now() + period;
    loop {
        let wait = deadline.saturating_duration_since(Instant::now());
        match stop.recv_timeout(wait) {
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            // Cancelled, or the handle went away.
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
        if on_tick().is_break() {
            break;
        }

        deadline += period;
        let now = Instant::now();
        if deadline <= now {
            let behind = (now - deadline).as_nanos() / period.as_nanos();
            let skipped = u32::try_from(behind + 1).unwrap_or(u32::MAX);
            trace!(skipped, "ticker overran; skipping to next aligned tick");
            deadline += period * skipped;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/live/ticker.rs"]
mod tests;
