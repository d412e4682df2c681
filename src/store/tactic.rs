use crate::foundation::error::{BoardError, BoardResult};
use crate::model::frame::{Frame, validate_animation};

/// Opaque tactic identifier assigned by a store.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TacticId(pub String);

impl std::fmt::Display for TacticId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a saved tactic represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TacticKind {
    /// A team shape.
    Formation,
    /// A training exercise.
    Drill,
    /// A dead-ball routine.
    SetPiece,
}

/// A stored animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tactic {
    /// Store-assigned id.
    pub id: TacticId,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tactic category.
    #[serde(rename = "type")]
    pub kind: TacticKind,
    /// Built-in tactic visible in every scope.
    #[serde(default)]
    pub is_preset: bool,
    /// Owning scope (an academy); `None` for presets and unscoped tactics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Animation frames.
    pub frames: Vec<Frame>,
}

/// Input to [`TacticStore::create`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTactic {
    /// Display name; must not be blank.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Tactic category.
    #[serde(rename = "type")]
    pub kind: TacticKind,
    /// Built-in tactic visible in every scope.
    #[serde(default)]
    pub is_preset: bool,
    /// Owning scope.
    #[serde(default)]
    pub scope: Option<String>,
    /// Animation frames; must not be empty.
    pub frames: Vec<Frame>,
}

impl NewTactic {
    /// Scoped, non-preset tactic.
    pub fn new(
        name: impl Into<String>,
        kind: TacticKind,
        scope: Option<String>,
        frames: Vec<Frame>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            is_preset: false,
            scope,
            frames,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reject blank names and empty or malformed frame lists.
    pub fn validate(&self) -> BoardResult<()> {
        if self.name.trim().is_empty() {
            return Err(BoardError::invalid_input("tactic name must not be blank"));
        }
        validate_animation(&self.frames)
    }

    pub(crate) fn into_tactic(self, id: TacticId) -> Tactic {
        Tactic {
            id,
            name: self.name,
            description: self.description,
            kind: self.kind,
            is_preset: self.is_preset,
            scope: self.scope,
            frames: self.frames,
        }
    }
}

/// Persistence collaborator for tactics.
pub trait TacticStore {
    /// Validate and save a tactic, returning its new id.
    fn create(&mut self, tactic: NewTactic) -> BoardResult<TacticId>;

    /// Tactics owned by `scope` plus every preset, newest first.
    fn list(&self, scope: Option<&str>) -> BoardResult<Vec<Tactic>>;

    /// Fetch one tactic.
    fn get(&self, id: &TacticId) -> BoardResult<Tactic>;

    /// Delete one tactic.
    fn delete(&mut self, id: &TacticId) -> BoardResult<()>;

    /// Delete every preset, returning how many were removed.
    fn delete_presets(&mut self) -> BoardResult<usize>;
}
