/// Convenience result type used across pitchboard.
pub type BoardResult<T> = Result<T, BoardError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Token id mismatches between two poses are deliberately absent: a token missing from one side
/// of a segment is held stationary instead of failing.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    /// Malformed poses, non-positive durations or rates, empty frame sequences.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A recording/playback transition that is not allowed from the current state.
    #[error("state conflict: {0}")]
    StateConflict(String),

    /// The optional text-to-tactic generator failed or produced unusable output.
    #[error("generator error: {0}")]
    Generator(String),

    /// A tactic id that the store does not know.
    #[error("not found: {0}")]
    NotFound(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoardError {
    /// Build a [`BoardError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`BoardError::StateConflict`] value.
    pub fn state_conflict(msg: impl Into<String>) -> Self {
        Self::StateConflict(msg.into())
    }

    /// Build a [`BoardError::Generator`] value.
    pub fn generator(msg: impl Into<String>) -> Self {
        Self::Generator(msg.into())
    }

    /// Build a [`BoardError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`BoardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
