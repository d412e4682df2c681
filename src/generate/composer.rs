use std::sync::{Arc, mpsc};
use std::time::Duration;

use tracing::{info, warn};

use crate::animation::scenario::ScriptedScenario;
use crate::foundation::core::BoardBounds;
use crate::foundation::error::{BoardError, BoardResult};
use crate::generate::parse::parse_generated_frames;
use crate::model::frame::Frame;

/// Capability interface for a best-effort text-to-tactic generator.
pub trait TacticGenerator: Send + Sync {
    /// Turn a coaching request into frames. Any error makes the caller fall back.
    fn generate(&self, prompt: &str) -> BoardResult<Vec<Frame>>;
}

/// Adapter over an opaque text-completion function (a hosted language model, a script, ...).
///
/// Wraps the request in a coaching prompt describing the board, then parses the reply with
/// [`parse_generated_frames`].
pub struct TextModelGenerator<F> {
    complete: F,
    board: BoardBounds,
}

impl<F> TextModelGenerator<F>
where
    F: Fn(&str) -> anyhow::Result<String> + Send + Sync,
{
    /// Adapter for the default 600x400 board.
    pub fn new(complete: F) -> Self {
        Self {
            complete,
            board: BoardBounds::default(),
        }
    }

    /// Describe a different board size in the prompt.
    pub fn with_board(mut self, board: BoardBounds) -> Self {
        self.board = board;
        self
    }

    /// Full prompt sent to the completion function.
    pub fn prompt_for(&self, request: &str) -> String {
        format!(
            "Football coach. Create animation frames (JSON array of {{\"timestamp\", \"tokens\"}}). \
             Board: {}x{}. Teams: home (h1-h11), away (a1-a11), ball. \
             Token fields: id, type (home|away|ball), x, y, label.\n\nUser Request: {request}",
            self.board.width, self.board.height
        )
    }
}

impl<F> TacticGenerator for TextModelGenerator<F>
where
    F: Fn(&str) -> anyhow::Result<String> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> BoardResult<Vec<Frame>> {
        let reply = (self.complete)(&self.prompt_for(prompt))
            .map_err(|e| BoardError::generator(format!("completion failed: {e:#}")))?;
        parse_generated_frames(&reply)
    }
}

/// Which stage produced a composed tactic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationSource {
    /// The primary text-to-tactic generator.
    Model,
    /// The scripted fallback scenario.
    Scripted,
}

/// Frames plus provenance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedTactic {
    /// Generated animation.
    pub frames: Vec<Frame>,
    /// Stage that produced `frames`.
    pub source: GenerationSource,
}

/// Two-stage generation: optional primary generator, always-available scripted fallback.
#[derive(Clone, Default)]
pub struct TacticComposer {
    primary: Option<Arc<dyn TacticGenerator>>,
    timeout: Option<Duration>,
    fallback: ScriptedScenario,
}

impl TacticComposer {
    /// Composer that only ever uses `fallback`.
    pub fn new(fallback: ScriptedScenario) -> Self {
        Self {
            primary: None,
            timeout: None,
            fallback,
        }
    }

    /// Try `primary` first.
    pub fn with_primary(mut self, primary: Arc<dyn TacticGenerator>) -> Self {
        self.primary = Some(primary);
        self
    }

    /// Give up on the primary generator after `timeout`. The call keeps running on its own
    /// thread; its late result is discarded.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Return `true` when a primary generator is configured.
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Generate frames for `prompt`. Never fails: primary failures are logged and replaced by
    /// the scripted scenario.
    pub fn compose(&self, prompt: &str) -> GeneratedTactic {
        if let Some(primary) = &self.primary {
            match self.run_primary(primary, prompt) {
                Ok(frames) => {
                    info!(frames = frames.len(), "tactic generated by model");
                    return GeneratedTactic {
                        frames,
                        source: GenerationSource::Model,
                    };
                }
                Err(e) => warn!(error = %e, "tactic generator failed; using scripted scenario"),
            }
        }
        GeneratedTactic {
            frames: self.fallback.generate(prompt),
            source: GenerationSource::Scripted,
        }
    }

    fn run_primary(
        &self,
        primary: &Arc<dyn TacticGenerator>,
        prompt: &str,
    ) -> BoardResult<Vec<Frame>> {
        let Some(timeout) = self.timeout else {
            return primary.generate(prompt);
        };

        let (tx, rx) = mpsc::channel();
        let generator = Arc::clone(primary);
        let prompt = prompt.to_owned();
        std::thread::Builder::new()
            .name("tactic-generator".to_owned())
            .spawn(move || {
                let _ = tx.send(generator.generate(&prompt));
            })
            .map_err(|e| BoardError::generator(format!("spawn generator thread: {e}")))?;

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(BoardError::generator(format!(
                "no reply within {} ms",
                timeout.as_millis()
            ))),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(BoardError::generator(
                "generator thread exited without a reply",
            )),
        }
    }
}

impl std::fmt::Debug for TacticComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TacticComposer")
            .field("has_primary", &self.primary.is_some())
            .field("timeout", &self.timeout)
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/composer.rs"]
mod tests;
