use crate::commands::helpers::{authorize, flush_or_warn};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Action, Result};
use crate::identity::Identity;
use crate::store::{PasteStore, StorageBackend};

/// Removes a paste, keeping the order of the others.
///
/// An unknown id is a silent no-op, same as update.
pub fn run<B: StorageBackend>(
    store: &mut PasteStore<B>,
    actor: &Identity,
    id: &str,
) -> Result<CmdResult> {
    let Some(index) = store.position(id) else {
        tracing::debug!(%id, "delete target missing, ignoring");
        return Ok(CmdResult::default());
    };

    authorize(&store.pastes()[index], actor, Action::Delete)?;
    let removed = store.take(index);

    let mut result = CmdResult::default();
    flush_or_warn(store, &mut result);
    result.add_message(CmdMessage::success("Paste deleted"));
    result.affected_pastes.push(removed);
    Ok(result)
}
