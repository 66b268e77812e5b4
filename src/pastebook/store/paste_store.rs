use super::backend::{Slot, StorageBackend};
use crate::error::Result;
use crate::model::Paste;

/// The canonical in-memory paste collection and its mirror in the `pastes` slot.
///
/// Order is insertion order and is never re-sorted. Rules about who may change
/// what live in the command layer; this type only holds state and flushes it.
pub struct PasteStore<B: StorageBackend> {
    pastes: Vec<Paste>,
    is_owner: bool,
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> PasteStore<B> {
    /// Loads the collection from the backend.
    ///
    /// A missing slot yields an empty store. An unreadable slot or one holding
    /// invalid JSON is an error, so a later flush can never clobber it.
    pub fn open(backend: B) -> Result<Self> {
        let pastes = match backend.read(Slot::Pastes)? {
            Some(raw) => serde_json::from_str::<Vec<Paste>>(&raw)?,
            None => Vec::new(),
        };
        tracing::debug!(count = pastes.len(), "loaded pastes");

        Ok(Self {
            pastes,
            is_owner: false,
            backend,
        })
    }

    pub fn pastes(&self) -> &[Paste] {
        &self.pastes
    }

    pub fn len(&self) -> usize {
        self.pastes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pastes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Paste> {
        self.pastes.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.pastes.iter().position(|p| p.id == id)
    }

    /// Result of the last ownership check. Stale after any later mutation.
    pub fn is_owner(&self) -> bool {
        self.is_owner
    }

    pub(crate) fn set_is_owner(&mut self, is_owner: bool) {
        self.is_owner = is_owner;
    }

    pub(crate) fn push(&mut self, paste: Paste) {
        self.pastes.push(paste);
    }

    pub(crate) fn replace(&mut self, index: usize, paste: Paste) {
        self.pastes[index] = paste;
    }

    pub(crate) fn take(&mut self, index: usize) -> Paste {
        self.pastes.remove(index)
    }

    pub(crate) fn clear(&mut self) {
        self.pastes.clear();
    }

    /// Writes the whole collection to the `pastes` slot.
    pub fn flush(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.pastes)?;
        self.backend.write(Slot::Pastes, &raw)?;
        tracing::debug!(count = self.pastes.len(), "flushed pastes");
        Ok(())
    }

    /// Removes the `pastes` slot itself rather than writing an empty array.
    pub fn erase(&self) -> Result<()> {
        self.backend.remove(Slot::Pastes)?;
        tracing::debug!("erased persisted pastes");
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
