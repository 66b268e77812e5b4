//! # Pastebook Architecture
//!
//! Pastebook is a **local-first paste library**. Pastes are written, browsed,
//! edited, shared and deleted entirely on the client; there is no server. The
//! bundled CLI is one client of the library, not the other way round.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats dates, prints results          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds the session identity and hands it to commands      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Uniqueness and ownership rules                           │
//! │  - Flush after every successful mutation                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PasteStore: ordered in-memory collection                 │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`identity`] module sits beside the storage layer as a leaf: it reads
//! and writes the single anonymous identity and knows nothing about pastes.
//!
//! ## Ownership
//!
//! A paste records the identity that created it. Only that identity may edit
//! or delete it. Pastes saved before ownership existed have no owner and stay
//! open to everyone.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never touches stdout, stderr or the process exit
//! code. Logging goes through `tracing` and is routed by the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`identity`]: Anonymous identity and its provider
//! - [`model`]: Core data types (`Paste`, `PasteDraft`, `PasteUpdate`)
//! - [`config`]: Configuration and paste links
//! - [`editor`]: External editor integration
//! - [`clipboard`]: Clipboard copy and link sharing
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod identity;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
