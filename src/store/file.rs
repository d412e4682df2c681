use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::BoardResult;
use crate::store::memory::InMemoryTacticStore;
use crate::store::tactic::{NewTactic, Tactic, TacticId, TacticStore};

/// Tactic store persisted as a single JSON document, rewritten after every change.
#[derive(Debug)]
pub struct JsonFileTacticStore {
    path: PathBuf,
    inner: InMemoryTacticStore,
}

impl JsonFileTacticStore {
    /// Open the store at `path`; a missing file starts an empty store.
    pub fn open(path: impl Into<PathBuf>) -> BoardResult<Self> {
        let path = path.into();
        let inner: InMemoryTacticStore = if path.exists() {
            let f = File::open(&path)
                .with_context(|| format!("open tactic store '{}'", path.display()))?;
            serde_json::from_reader(BufReader::new(f))?
        } else {
            InMemoryTacticStore::new()
        };
        Ok(Self { path, inner })
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the store, persist the copy, then adopt it. A failed write
    /// leaves memory untouched.
    fn commit<R>(
        &mut self,
        change: impl FnOnce(&mut InMemoryTacticStore) -> BoardResult<R>,
    ) -> BoardResult<R> {
        let mut next = self.inner.clone();
        let out = change(&mut next)?;
        self.save(&next)?;
        self.inner = next;
        Ok(out)
    }

    fn save(&self, doc: &InMemoryTacticStore) -> BoardResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create store dir '{}'", parent.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        {
            let f = File::create(&tmp)
                .with_context(|| format!("create '{}'", tmp.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, doc)?;
            w.flush()
                .with_context(|| format!("write '{}'", tmp.display()))?;
        }
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace tactic store '{}'", self.path.display()))?;
        Ok(())
    }
}

impl TacticStore for JsonFileTacticStore {
    fn create(&mut self, tactic: NewTactic) -> BoardResult<TacticId> {
        self.commit(|doc| doc.create(tactic))
    }

    fn list(&self, scope: Option<&str>) -> BoardResult<Vec<Tactic>> {
        self.inner.list(scope)
    }

    fn get(&self, id: &TacticId) -> BoardResult<Tactic> {
        self.inner.get(id)
    }

    fn delete(&mut self, id: &TacticId) -> BoardResult<()> {
        self.commit(|doc| doc.delete(id))
    }

    fn delete_presets(&mut self) -> BoardResult<usize> {
        if self.inner.list(None)?.iter().all(|t| !t.is_preset) {
            return Ok(0);
        }
        self.commit(|doc| doc.delete_presets())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/file.rs"]
mod tests;
