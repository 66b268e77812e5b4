use crate::commands::CmdResult;
use crate::error::{PasteError, Result};
use crate::store::{PasteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &PasteStore<B>, id: &str) -> Result<CmdResult> {
    let paste = store
        .get(id)
        .cloned()
        .ok_or_else(|| PasteError::PasteNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_pastes(vec![paste]))
}
