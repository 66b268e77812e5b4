use crate::commands::helpers::flush_or_warn;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PasteError, Result};
use crate::identity::Identity;
use crate::model::{new_paste_id, Paste, PasteDraft};
use crate::store::{PasteStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut PasteStore<B>,
    actor: &Identity,
    draft: PasteDraft,
) -> Result<CmdResult> {
    let id = draft.id.unwrap_or_else(new_paste_id);
    if store.get(&id).is_some() {
        return Err(PasteError::DuplicateIdentifier(id));
    }

    // draft.created_at is deliberately dropped: creation time is always "now"
    let paste = Paste::new(id, draft.title, draft.content, actor);
    store.push(paste.clone());
    tracing::debug!(id = %paste.id, owner = %actor, "paste created");

    let mut result = CmdResult::default();
    flush_or_warn(store, &mut result);
    result.add_message(CmdMessage::success("Paste added"));
    result.affected_pastes.push(paste);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;
    use crate::store::Slot;
    use chrono::{TimeZone, Utc};

    fn actor() -> Identity {
        Identity::new("u1")
    }

    #[test]
    fn creates_paste_owned_by_actor() {
        let mut store = PasteStore::open(MemBackend::new()).unwrap();
        let result = run(&mut store, &actor(), PasteDraft::new("T", "C")).unwrap();

        assert_eq!(store.len(), 1);
        let paste = &store.pastes()[0];
        assert_eq!(paste.title, "T");
        assert_eq!(paste.content, "C");
        assert_eq!(paste.owner.as_deref(), Some("u1"));
        assert!(!paste.id.is_empty());
        assert_eq!(result.affected_pastes[0], *paste);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn ignores_caller_supplied_creation_time() {
        let mut store = PasteStore::open(MemBackend::new()).unwrap();
        let stale = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        let before = Utc::now();
        run(
            &mut store,
            &actor(),
            PasteDraft::new("T", "C").with_created_at(stale),
        )
        .unwrap();
        let after = Utc::now();

        let created_at = store.pastes()[0].created_at;
        assert!(created_at >= before && created_at <= after);
    }

    #[test]
    fn honors_supplied_id() {
        let mut store = PasteStore::open(MemBackend::new()).unwrap();
        run(&mut store, &actor(), PasteDraft::new("T", "C").with_id("abc")).unwrap();
        assert!(store.get("abc").is_some());
    }

    #[test]
    fn duplicate_id_is_rejected_without_write() {
        let backend = MemBackend::new();
        let mut store = PasteStore::open(&backend).unwrap();
        run(&mut store, &actor(), PasteDraft::new("First", "1").with_id("dup")).unwrap();
        let persisted = backend.read(Slot::Pastes).unwrap();

        let err = run(
            &mut store,
            &Identity::new("u2"),
            PasteDraft::new("Second", "2").with_id("dup"),
        )
        .unwrap_err();

        assert!(matches!(err, PasteError::DuplicateIdentifier(ref id) if id == "dup"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.pastes()[0].title, "First");
        assert_eq!(backend.read(Slot::Pastes).unwrap(), persisted);
    }

    #[test]
    fn appends_in_insertion_order() {
        let mut store = PasteStore::open(MemBackend::new()).unwrap();
        for title in ["one", "two", "three"] {
            run(&mut store, &actor(), PasteDraft::new(title, "")).unwrap();
        }
        let titles: Vec<_> = store.pastes().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn flushes_after_create() {
        let backend = MemBackend::new();
        let mut store = PasteStore::open(&backend).unwrap();
        run(&mut store, &actor(), PasteDraft::new("T", "C")).unwrap();

        let raw = backend.read(Slot::Pastes).unwrap().unwrap();
        let persisted: Vec<Paste> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.pastes());
    }

    #[test]
    fn write_failure_keeps_paste_in_memory() {
        let backend = MemBackend::new();
        let mut store = PasteStore::open(&backend).unwrap();
        backend.set_simulate_write_error(true);

        let result = run(&mut store, &actor(), PasteDraft::new("T", "C")).unwrap();
        assert_eq!(store.len(), 1);
        assert!(result.has_warnings());
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Success)));
    }
}
