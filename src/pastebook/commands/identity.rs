use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identity::{Identity, IdentityProvider};
use crate::store::StorageBackend;

/// Persists `id` as the acting identity. Existing pastes keep their owners.
///
/// A storage failure is reported as a warning; the caller still switches to
/// `id` for the rest of the session.
pub fn run<B: StorageBackend>(provider: &IdentityProvider<B>, id: &Identity) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match provider.set_current_identity(id) {
        Ok(()) => result.add_message(CmdMessage::success(format!("Now writing as {}", id))),
        Err(e) => {
            tracing::warn!(error = %e, identity = %id, "failed to persist identity");
            result.add_message(CmdMessage::warning(format!(
                "Writing as {} for this session only: {}",
                id, e
            )));
        }
    }
    Ok(result)
}
