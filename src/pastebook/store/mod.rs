//! # Storage Layer
//!
//! This module defines the storage abstraction for pastebook. Persistence is
//! split in two:
//!
//! - [`backend::StorageBackend`]: raw, durable named slots (the "how")
//! - [`paste_store::PasteStore`]: the in-memory paste collection and the
//!   flush that mirrors it into the `pastes` slot (the "what")
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one file per slot
//! - [`mem_backend::MemBackend`]: in-memory storage for testing, with
//!   read/write failure simulation
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── pastes.json     # Whole paste collection (JSON array)
//! ├── currentUser     # Anonymous identity (plain text)
//! └── config.json     # Client configuration
//! ```
//!
//! The two slots are independent: resetting the pastes never touches the
//! identity, and vice versa.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod paste_store;

pub use backend::{Slot, StorageBackend};
pub use paste_store::PasteStore;
