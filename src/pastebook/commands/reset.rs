use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{PasteStore, StorageBackend};

/// Wipes every paste, regardless of owner, and removes the persisted slot.
pub fn run<B: StorageBackend>(store: &mut PasteStore<B>) -> Result<CmdResult> {
    let count = store.len();
    store.clear();

    let mut result = CmdResult::default();
    if let Err(e) = store.erase() {
        tracing::warn!(error = %e, "failed to remove persisted pastes");
        result.add_message(CmdMessage::warning(format!(
            "Pastes cleared for this session but storage could not be wiped: {}",
            e
        )));
    }
    result.add_message(CmdMessage::info(format!("Removed {} paste(s)", count)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::identity::Identity;
    use crate::model::PasteDraft;
    use crate::store::mem_backend::MemBackend;
    use crate::store::Slot;

    #[test]
    fn clears_memory_and_removes_slot() {
        let backend = MemBackend::new();
        backend.write(Slot::CurrentUser, "a").unwrap();
        let mut store = PasteStore::open(&backend).unwrap();
        create::run(&mut store, &Identity::new("a"), PasteDraft::new("1", "")).unwrap();
        create::run(&mut store, &Identity::new("b"), PasteDraft::new("2", "")).unwrap();

        run(&mut store).unwrap();

        assert!(store.is_empty());
        assert!(!backend.contains(Slot::Pastes));
        assert_eq!(backend.read(Slot::CurrentUser).unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn reset_on_empty_store_is_fine() {
        let mut store = PasteStore::open(MemBackend::new()).unwrap();
        let result = run(&mut store).unwrap();
        assert!(!result.has_warnings());
    }

    #[test]
    fn storage_failure_still_clears_memory() {
        let backend = MemBackend::new();
        let mut store = PasteStore::open(&backend).unwrap();
        create::run(&mut store, &Identity::new("a"), PasteDraft::new("1", "")).unwrap();
        backend.set_simulate_write_error(true);

        let result = run(&mut store).unwrap();
        assert!(store.is_empty());
        assert!(result.has_warnings());
        assert!(backend.contains(Slot::Pastes));
    }
}
