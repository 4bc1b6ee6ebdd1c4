//! # Handbook Architecture
//!
//! Handbook is a **UI-agnostic reference library**: pages hold categories, categories
//! hold entries, and entries are either text you copy to the clipboard or static
//! information. The `handbook` binary is one client of this library; nothing below
//! the CLI assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, trims and validates input              │
//! │  - Confirms destructive operations, renders, copies         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory document                              │
//! │  - Persists after every mutation                            │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure copy-on-write rewrites of the document              │
//! │  - Silent no-op on stale ids, reported via a matched flag   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - LocalStorage: JSON + default fallback + failure logging  │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The store facade, entry point for all operations
//! - [`commands`]: Document rewrites, lookups and config handling
//! - [`store`]: Storage adapter and backends
//! - [`model`]: Core data types (`HandbookData`, `Page`, `Category`, `Entry`)
//! - [`ids`]: Slug and id derivation
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod init;
pub mod model;
pub mod store;
