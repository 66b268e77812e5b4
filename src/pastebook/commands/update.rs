use crate::commands::helpers::{authorize, flush_or_warn};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Action, Result};
use crate::identity::Identity;
use crate::model::{Paste, PasteUpdate};
use crate::store::{PasteStore, StorageBackend};

/// Replaces title and content of an existing paste.
///
/// An unknown id is a silent no-op: `Ok` with an empty result and no write.
pub fn run<B: StorageBackend>(
    store: &mut PasteStore<B>,
    actor: &Identity,
    update: PasteUpdate,
) -> Result<CmdResult> {
    let Some(index) = store.position(&update.id) else {
        tracing::debug!(id = %update.id, "update target missing, ignoring");
        return Ok(CmdResult::default());
    };

    let existing = &store.pastes()[index];
    authorize(existing, actor, Action::Edit)?;

    let paste = Paste {
        id: existing.id.clone(),
        title: update.title,
        content: update.content,
        created_at: existing.created_at,
        owner: Some(actor.as_str().to_string()),
    };
    store.replace(index, paste.clone());

    let mut result = CmdResult::default();
    flush_or_warn(store, &mut result);
    result.add_message(CmdMessage::success("Paste updated"));
    result.affected_pastes.push(paste);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::PasteError;
    use crate::model::PasteDraft;
    use crate::store::mem_backend::MemBackend;
    use crate::store::Slot;
    use chrono::{TimeZone, Utc};

    fn seeded<'a>(backend: &'a MemBackend, owner: Option<&str>) -> PasteStore<&'a MemBackend> {
        let mut store = PasteStore::open(backend).unwrap();
        store.push(Paste {
            id: "x".into(),
            title: "T1".into(),
            content: "C1".into(),
            created_at: Utc.with_ymd_and_hms(2020, 5, 6, 7, 8, 9).unwrap(),
            owner: owner.map(str::to_string),
        });
        store.flush().unwrap();
        store
    }

    #[test]
    fn owner_can_update() {
        let backend = MemBackend::new();
        let mut store = seeded(&backend, Some("a"));
        let original = store.pastes()[0].clone();

        let result = run(
            &mut store,
            &Identity::new("a"),
            PasteUpdate::new("x", "T2", "C2"),
        )
        .unwrap();

        let paste = &store.pastes()[0];
        assert_eq!(paste.title, "T2");
        assert_eq!(paste.content, "C2");
        assert_eq!(paste.id, original.id);
        assert_eq!(paste.owner, original.owner);
        assert_eq!(paste.created_at, original.created_at);
        assert_eq!(result.messages[0].content, "Paste updated");
    }

    #[test]
    fn non_owner_is_rejected() {
        let backend = MemBackend::new();
        let mut store = seeded(&backend, Some("a"));
        let before_persisted = backend.read(Slot::Pastes).unwrap();
        let before = store.pastes().to_vec();

        let err = run(
            &mut store,
            &Identity::new("b"),
            PasteUpdate::new("x", "hacked", "hacked"),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PasteError::NotAuthorized {
                action: Action::Edit,
                ..
            }
        ));
        assert_eq!(err.to_string(), "You can only edit your own pastes");
        assert_eq!(store.pastes(), &before[..]);
        assert_eq!(backend.read(Slot::Pastes).unwrap(), before_persisted);
    }

    #[test]
    fn ownerless_paste_is_claimed_by_updater() {
        let backend = MemBackend::new();
        let mut store = seeded(&backend, None);

        run(
            &mut store,
            &Identity::new("b"),
            PasteUpdate::new("x", "T2", "C2"),
        )
        .unwrap();

        let paste = &store.pastes()[0];
        assert_eq!(paste.title, "T2");
        assert_eq!(paste.owner.as_deref(), Some("b"));
        assert_eq!(
            paste.created_at,
            Utc.with_ymd_and_hms(2020, 5, 6, 7, 8, 9).unwrap()
        );
    }

    #[test]
    fn missing_target_is_silent_noop() {
        let backend = MemBackend::new();
        let mut store = seeded(&backend, Some("a"));
        let before_persisted = backend.read(Slot::Pastes).unwrap();
        backend.set_simulate_write_error(true);

        let result = run(
            &mut store,
            &Identity::new("a"),
            PasteUpdate::new("nope", "T", "C"),
        )
        .unwrap();

        assert!(result.messages.is_empty());
        assert!(result.affected_pastes.is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(backend.read(Slot::Pastes).unwrap(), before_persisted);
    }

    #[test]
    fn update_keeps_position() {
        let backend = MemBackend::new();
        let mut store = PasteStore::open(&backend).unwrap();
        let me = Identity::new("me");
        for id in ["a", "b", "c"] {
            create::run(&mut store, &me, PasteDraft::new(id, "").with_id(id)).unwrap();
        }

        run(&mut store, &me, PasteUpdate::new("b", "B!", "")).unwrap();
        let titles: Vec<_> = store.pastes().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "B!", "c"]);
    }

    #[test]
    fn persisted_state_matches_memory() {
        let backend = MemBackend::new();
        let mut store = seeded(&backend, Some("a"));
        run(
            &mut store,
            &Identity::new("a"),
            PasteUpdate::new("x", "T2", "C2"),
        )
        .unwrap();

        let raw = backend.read(Slot::Pastes).unwrap().unwrap();
        let persisted: Vec<Paste> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.pastes());
    }
}
