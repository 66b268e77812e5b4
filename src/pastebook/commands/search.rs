use crate::commands::CmdResult;
use crate::model::Paste;
use crate::store::{PasteStore, StorageBackend};

/// Pastes whose title contains `query`, ignoring case, in collection order.
///
/// Only titles are searched, and the query is used as given. An empty query
/// lists everything.
pub fn filter<'a>(pastes: &'a [Paste], query: &str) -> Vec<&'a Paste> {
    pastes
        .iter()
        .filter(|p| query.is_empty() || p.title_matches(query))
        .collect()
}

pub fn run<B: StorageBackend>(store: &PasteStore<B>, query: &str) -> CmdResult {
    let listed = filter(store.pastes(), query).into_iter().cloned().collect();
    CmdResult::default().with_listed_pastes(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::identity::Identity;
    use crate::model::PasteDraft;
    use crate::store::mem_backend::MemBackend;

    fn store_with_titles(titles: &[&str]) -> PasteStore<MemBackend> {
        let mut store = PasteStore::open(MemBackend::new()).unwrap();
        for title in titles {
            create::run(&mut store, &Identity::new("u"), PasteDraft::new(*title, "body")).unwrap();
        }
        store
    }

    #[test]
    fn matches_title_in_any_case() {
        let store = store_with_titles(&["Shopping List", "Recipe"]);
        for query in ["list", "LIST", "List"] {
            let listed = run(&store, query).listed_pastes;
            assert_eq!(listed.len(), 1, "query {}", query);
            assert_eq!(listed[0].title, "Shopping List");
        }
    }

    #[test]
    fn whitespace_in_query_is_significant() {
        let store = store_with_titles(&["Shopping List", "Recipe"]);
        assert!(run(&store, "list ").listed_pastes.is_empty());

        let listed = run(&store, " ").listed_pastes;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Shopping List");
    }

    #[test]
    fn content_is_not_searched() {
        let store = store_with_titles(&["Shopping List"]);
        assert!(run(&store, "body").listed_pastes.is_empty());
    }

    #[test]
    fn empty_query_lists_everything_in_order() {
        let store = store_with_titles(&["b", "a", "c"]);
        let titles: Vec<_> = run(&store, "")
            .listed_pastes
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
    }

    #[test]
    fn search_does_not_mutate() {
        let store = store_with_titles(&["x"]);
        let before = store.pastes().to_vec();
        run(&store, "nothing");
        assert_eq!(store.pastes(), &before[..]);
    }
}
