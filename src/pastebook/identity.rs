//! # Anonymous Identity
//!
//! Every client has exactly one anonymous author identity, persisted in the
//! `currentUser` slot. Until it is initialized the slot reads as the sentinel
//! [`GUEST`]. Callers bootstrap it once with [`IdentityProvider::ensure_initialized`].

use crate::error::Result;
use crate::model::random_base36;
use crate::store::{Slot, StorageBackend};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel identity meaning "not yet initialized".
pub const GUEST: &str = "guest";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn guest() -> Self {
        Self(GUEST.to_string())
    }

    /// A fresh identity: `user_<millis>_<random>`.
    pub fn generate() -> Self {
        Self(format!(
            "user_{}_{}",
            Utc::now().timestamp_millis(),
            random_base36()
        ))
    }

    pub fn is_guest(&self) -> bool {
        self.0 == GUEST
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Reads and writes the persisted identity.
pub struct IdentityProvider<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> IdentityProvider<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The persisted identity, or the sentinel when unset or unreadable.
    pub fn get_current_identity(&self) -> Identity {
        match self.backend.read(Slot::CurrentUser) {
            Ok(Some(id)) if !id.is_empty() => Identity(id),
            Ok(_) => Identity::guest(),
            Err(e) => {
                tracing::warn!(error = %e, "identity storage unavailable, acting as guest");
                Identity::guest()
            }
        }
    }

    pub fn set_current_identity(&self, id: &Identity) -> Result<()> {
        self.backend.write(Slot::CurrentUser, id.as_str())
    }

    /// Replaces the sentinel with a generated identity. A non-sentinel
    /// identity is returned untouched.
    ///
    /// When the slot cannot be read, a generated identity is returned for this
    /// session only and the stored value is left alone.
    pub fn ensure_initialized(&self) -> Identity {
        match self.backend.read(Slot::CurrentUser) {
            Ok(Some(id)) if !id.is_empty() && id != GUEST => return Identity(id),
            Ok(_) => {}
            Err(e) => {
                let generated = Identity::generate();
                tracing::warn!(
                    error = %e,
                    identity = %generated,
                    "identity storage unreadable, using a session-only identity"
                );
                return generated;
            }
        }

        let generated = Identity::generate();
        match self.set_current_identity(&generated) {
            Ok(()) => tracing::info!(identity = %generated, "initialized anonymous identity"),
            Err(e) => tracing::warn!(
                error = %e,
                identity = %generated,
                "could not persist identity, it will last for this session only"
            ),
        }
        generated
    }
}
