use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::animation::scenario::ScenarioParams;
use crate::foundation::core::{BoardBounds, SampleRate};
use crate::foundation::error::{BoardError, BoardResult};

/// Engine configuration. Every field has a default, so a partial JSON document is valid.
///
/// ```json
/// { "sample_rate": 25, "tick_interval_ms": 40, "scenario": { "frame_count": 20 } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Rate used when interpolating poses.
    pub sample_rate: SampleRate,
    /// Live recording and playback period.
    pub tick_interval_ms: u64,
    /// Board geometry.
    pub board: BoardBounds,
    /// Scripted fallback tuning.
    pub scenario: ScenarioParams,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            sample_rate: SampleRate::default(),
            tick_interval_ms: 50,
            board: BoardBounds::default(),
            scenario: ScenarioParams::default(),
        }
    }
}

impl BoardConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BoardError::invalid_input(format!("open config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| BoardError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every section.
    pub fn validate(&self) -> BoardResult<()> {
        SampleRate::new(self.sample_rate.hz())?;
        if self.tick_interval_ms == 0 {
            return Err(BoardError::invalid_input("tick_interval_ms must be > 0"));
        }
        self.board.validate()?;
        self.scenario.validate()
    }

    /// Live tick period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
