//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every pastebook operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session identity** and passes it explicitly to each command
//! - **Bootstraps** the anonymous identity when the client is first opened
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: ownership and uniqueness rules live in `commands/*.rs`
//! - **I/O presentation**: no stdout, stderr or terminal concerns
//!
//! ## Generic Over StorageBackend
//!
//! `PasteApi<B>` needs two handles on the same backend (paste collection and
//! identity), so `B` must be `Clone` with clones sharing state:
//! - Production: `PasteApi<FsBackend>`
//! - Testing: `PasteApi<Rc<MemBackend>>`

use crate::commands;
use crate::error::Result;
use crate::identity::{Identity, IdentityProvider};
use crate::model::{Paste, PasteDraft, PasteUpdate};
use crate::store::{PasteStore, StorageBackend};

/// The main API facade for pastebook operations.
pub struct PasteApi<B: StorageBackend + Clone> {
    store: PasteStore<B>,
    identity: IdentityProvider<B>,
    current_user: Identity,
}

impl<B: StorageBackend + Clone> PasteApi<B> {
    /// Loads the collection and makes sure an anonymous identity exists.
    pub fn open(backend: B) -> Result<Self> {
        let identity = IdentityProvider::new(backend.clone());
        let current_user = identity.ensure_initialized();
        let store = PasteStore::open(backend)?;
        Ok(Self {
            store,
            identity,
            current_user,
        })
    }

    pub fn current_user(&self) -> &Identity {
        &self.current_user
    }

    pub fn pastes(&self) -> &[Paste] {
        self.store.pastes()
    }

    pub fn is_owner(&self) -> bool {
        self.store.is_owner()
    }

    pub fn add_to_pastes(&mut self, draft: PasteDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &self.current_user, draft)
    }

    pub fn update_pastes(&mut self, update: PasteUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &self.current_user, update)
    }

    pub fn remove_from_pastes(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &self.current_user, id)
    }

    pub fn reset_paste(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    /// Switches the acting identity. Ownership of existing pastes is untouched.
    pub fn set_current_user(&mut self, id: Identity) -> Result<commands::CmdResult> {
        let result = commands::identity::run(&self.identity, &id)?;
        self.current_user = id;
        Ok(result)
    }

    pub fn check_ownership(&mut self, id: &str) -> bool {
        commands::ownership::run(&mut self.store, &self.current_user, id)
    }

    pub fn search_pastes(&self, query: &str) -> commands::CmdResult {
        commands::search::run(&self.store, query)
    }

    pub fn view_paste(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
