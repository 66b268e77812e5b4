use crate::identity::Identity;
use crate::store::{PasteStore, StorageBackend};

/// Computes and stores the transient `is_owner` flag.
///
/// True only if the paste exists and is owned by `actor`. Owner-less pastes are
/// editable by anyone yet still report false here.
pub fn run<B: StorageBackend>(store: &mut PasteStore<B>, actor: &Identity, id: &str) -> bool {
    let is_owner = store.get(id).is_some_and(|p| p.is_owned_by(actor));
    store.set_is_owner(is_owner);
    is_owner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paste;
    use crate::store::mem_backend::MemBackend;
    use crate::store::Slot;
    use chrono::Utc;

    fn store_with(owner: Option<&str>) -> PasteStore<MemBackend> {
        let mut store = PasteStore::open(MemBackend::new()).unwrap();
        store.push(Paste {
            id: "x".into(),
            title: "t".into(),
            content: "c".into(),
            created_at: Utc::now(),
            owner: owner.map(str::to_string),
        });
        store
    }

    #[test]
    fn owner_is_owner() {
        let mut store = store_with(Some("a"));
        assert!(run(&mut store, &Identity::new("a"), "x"));
        assert!(store.is_owner());
    }

    #[test]
    fn other_identity_is_not_owner() {
        let mut store = store_with(Some("a"));
        run(&mut store, &Identity::new("a"), "x");
        assert!(!run(&mut store, &Identity::new("b"), "x"));
        assert!(!store.is_owner());
    }

    #[test]
    fn missing_paste_is_not_owned() {
        let mut store = store_with(Some("a"));
        assert!(!run(&mut store, &Identity::new("a"), "nope"));
    }

    #[test]
    fn ownerless_paste_is_not_owned() {
        let mut store = store_with(None);
        assert!(!run(&mut store, &Identity::new("a"), "x"));
    }

    #[test]
    fn check_does_not_write() {
        let mut store = store_with(Some("a"));
        run(&mut store, &Identity::new("a"), "x");
        assert!(!store.backend().contains(Slot::Pastes));
    }
}
