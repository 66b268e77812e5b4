use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Action, PasteError, Result};
use crate::identity::Identity;
use crate::model::Paste;
use crate::store::{PasteStore, StorageBackend};

/// Flushes the store; a failure becomes a warning on `result` instead of an error.
///
/// The in-memory collection stays authoritative for the rest of the session.
pub fn flush_or_warn<B: StorageBackend>(store: &PasteStore<B>, result: &mut CmdResult) {
    if let Err(e) = store.flush() {
        tracing::warn!(error = %e, "failed to persist pastes");
        result.add_message(CmdMessage::warning(format!(
            "Changes kept for this session but could not be saved: {}",
            e
        )));
    }
}

/// Rejects `action` on `paste` unless `actor` may mutate it.
pub fn authorize(paste: &Paste, actor: &Identity, action: Action) -> Result<()> {
    if paste.is_mutable_by(actor) {
        Ok(())
    } else {
        tracing::debug!(id = %paste.id, actor = %actor, %action, "mutation denied");
        Err(PasteError::NotAuthorized {
            action,
            id: paste.id.clone(),
        })
    }
}
