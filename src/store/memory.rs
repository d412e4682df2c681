use tracing::debug;

use crate::foundation::error::{BoardError, BoardResult};
use crate::store::tactic::{NewTactic, Tactic, TacticId, TacticStore};

/// Process-local tactic store. Also the document format of [`crate::JsonFileTacticStore`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InMemoryTacticStore {
    next_seq: u64,
    // insertion order
    tactics: Vec<Tactic>,
}

impl InMemoryTacticStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tactics, presets included.
    pub fn len(&self) -> usize {
        self.tactics.len()
    }

    /// Return `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.tactics.is_empty()
    }

    fn position(&self, id: &TacticId) -> BoardResult<usize> {
        self.tactics
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| BoardError::not_found(format!("tactic '{id}'")))
    }
}

impl TacticStore for InMemoryTacticStore {
    fn create(&mut self, tactic: NewTactic) -> BoardResult<TacticId> {
        tactic.validate()?;
        self.next_seq += 1;
        let id = TacticId(format!("t{:06}", self.next_seq));
        debug!(%id, name = %tactic.name, frames = tactic.frames.len(), "tactic created");
        self.tactics.push(tactic.into_tactic(id.clone()));
        Ok(id)
    }

    fn list(&self, scope: Option<&str>) -> BoardResult<Vec<Tactic>> {
        Ok(self
            .tactics
            .iter()
            .rev()
            .filter(|t| t.is_preset || t.scope.as_deref() == scope)
            .cloned()
            .collect())
    }

    fn get(&self, id: &TacticId) -> BoardResult<Tactic> {
        Ok(self.tactics[self.position(id)?].clone())
    }

    fn delete(&mut self, id: &TacticId) -> BoardResult<()> {
        let idx = self.position(id)?;
        self.tactics.remove(idx);
        debug!(%id, "tactic deleted");
        Ok(())
    }

    fn delete_presets(&mut self) -> BoardResult<usize> {
        let before = self.tactics.len();
        self.tactics.retain(|t| !t.is_preset);
        Ok(before - self.tactics.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/memory.rs"]
mod tests;
