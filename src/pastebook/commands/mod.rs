//! # Command Layer
//!
//! This module contains the **core business logic** of pastebook. Each command
//! lives in its own submodule and implements pure Rust functions over a
//! [`PasteStore`](crate::store::PasteStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the rules are enforced:
//! - Uniqueness of paste ids on create
//! - The ownership gate on update and delete
//! - Stamping `owner` and `created_at`
//! - Flushing the collection after every successful mutation
//!
//! Every command receives the **acting identity explicitly**. Commands never
//! read the identity from storage themselves; the API facade supplies it.
//!
//! ## Outcomes
//!
//! - Rejections (duplicate id, not authorized) are `Err` and leave the
//!   collection untouched.
//! - A missing target on update/delete is `Ok` with no messages at all.
//! - A failed flush keeps the in-memory change and adds a warning message.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a new paste
//! - [`update`]: Replace title and content of a paste
//! - [`delete`]: Remove a paste
//! - [`reset`]: Wipe the whole collection
//! - [`ownership`]: Compute the transient `is_owner` flag
//! - [`identity`]: Change the acting identity
//! - [`search`]: Title filter
//! - [`view`]: Fetch a single paste
//! - [`helpers`]: Shared utilities (flushing, authorization)

use crate::model::Paste;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod identity;
pub mod ownership;
pub mod reset;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_pastes: Vec<Paste>,
    pub listed_pastes: Vec<Paste>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_pastes(mut self, pastes: Vec<Paste>) -> Self {
        self.listed_pastes = pastes;
        self
    }

    /// True when any message is a warning.
    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
