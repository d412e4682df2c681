use crate::foundation::core::{BoardBounds, Point};
use crate::foundation::error::{BoardError, BoardResult};
use crate::model::frame::Frame;
use crate::model::token::Token;

/// The live, user-manipulated board state.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    tokens: Vec<Token>,
    bounds: BoardBounds,
}

impl Scene {
    /// Scene on the default 600x400 board.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_bounds(tokens, BoardBounds::default())
    }

    /// Scene on a custom board.
    pub fn with_bounds(tokens: Vec<Token>, bounds: BoardBounds) -> Self {
        Self { tokens, bounds }
    }

    /// Current tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Board the scene lives on.
    pub fn bounds(&self) -> BoardBounds {
        self.bounds
    }

    /// Owned copy of the current tokens, independent of later edits.
    pub fn snapshot(&self) -> Vec<Token> {
        self.tokens.clone()
    }

    /// Replace every token.
    pub fn set_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
    }

    /// Put the board into the state stored in `frame`.
    pub fn apply_frame(&mut self, frame: &Frame) {
        self.tokens.clone_from(&frame.tokens);
    }

    /// Drag token `id` to `to`, clamped inside the board margin. Returns the applied position.
    pub fn move_token(&mut self, id: &str, to: Point) -> BoardResult<Point> {
        let clamped = self.bounds.clamp(to);
        let token = self
            .tokens
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BoardError::invalid_input(format!("no token '{id}' on the board")))?;
        token.position = clamped;
        Ok(clamped)
    }
}

/// The 5v5 line-up a fresh board starts with.
impl Default for Scene {
    fn default() -> Self {
        Self::new(vec![
            Token::home("h1", 250.0, 150.0, "1"),
            Token::home("h2", 300.0, 100.0, "2"),
            Token::home("h3", 300.0, 200.0, "3"),
            Token::home("h4", 200.0, 250.0, "4"),
            Token::home("h5", 100.0, 150.0, "GK"),
            Token::ball("b1", 250.0, 150.0),
            Token::away("a1", 350.0, 150.0, "1"),
            Token::away("a2", 400.0, 100.0, "2"),
            Token::away("a3", 400.0, 200.0, "3"),
            Token::away("a4", 450.0, 50.0, "4"),
            Token::away("a5", 500.0, 150.0, "GK"),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/live/scene.rs"]
mod tests;
