use std::collections::HashSet;

use crate::foundation::core::Point;
use crate::foundation::error::{BoardError, BoardResult};

/// Side or role of a board token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Home-side player.
    Home,
    /// Away-side player.
    Away,
    /// The ball.
    Ball,
}

/// A movable entity on the board.
///
/// JSON shape: `{ "id": "h1", "type": "home", "x": 250.0, "y": 150.0, "label": "GK" }`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Identifier matching the same entity across poses and frames.
    pub id: String,
    /// Token category.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Board-space position.
    #[serde(flatten)]
    pub position: Point,
    /// Short display string (shirt number, role). Never interpolated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Token {
    /// Create an unlabelled token.
    pub fn new(id: impl Into<String>, kind: TokenKind, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Point::new(x, y),
            label: None,
        }
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Home-side player shorthand.
    pub fn home(id: impl Into<String>, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self::new(id, TokenKind::Home, x, y).with_label(label)
    }

    /// Away-side player shorthand.
    pub fn away(id: impl Into<String>, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self::new(id, TokenKind::Away, x, y).with_label(label)
    }

    /// Ball shorthand.
    pub fn ball(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(id, TokenKind::Ball, x, y)
    }

    /// Copy of this token moved to `position`.
    pub fn moved_to(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

/// One authored board state: the unit of animator input.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Pose {
    tokens: Vec<Token>,
}

impl Pose {
    /// Wrap an ordered token list.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Tokens in authoring order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the pose, returning its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Return `true` when the pose holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up a token by id.
    pub fn find(&self, id: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// A pose must hold at least one token and ids must be unique.
    pub fn validate(&self) -> BoardResult<()> {
        if self.tokens.is_empty() {
            return Err(BoardError::invalid_input("pose has no tokens"));
        }
        match duplicate_id(&self.tokens) {
            Some(id) => Err(BoardError::invalid_input(format!(
                "duplicate token id '{id}' in pose"
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<Token>> for Pose {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// First token id that appears more than once, if any.
pub(crate) fn duplicate_id(tokens: &[Token]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .map(|t| t.id.as_str())
        .find(|id| !seen.insert(*id))
}

#[cfg(test)]
#[path = "../../tests/unit/model/token.rs"]
mod tests;
