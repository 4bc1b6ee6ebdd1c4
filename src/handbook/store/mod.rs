//! # Storage Layer
//!
//! Persistence is split in two:
//!
//! - [`backend::StorageBackend`]: the "how". Raw string slots addressed by key,
//!   with no knowledge of what they hold.
//!   - [`fs_backend::FsBackend`]: production, one `<key>.json` file per slot.
//!   - [`mem_backend::MemBackend`]: in-memory fake for tests, able to simulate
//!     write failures.
//! - [`local::LocalStorage`]: the "what". JSON (de)serialization on top of a
//!   backend, with a fallback default and failure containment.
//!
//! ## Failure Containment
//!
//! `LocalStorage` never hands a storage error to its caller. A missing or
//! corrupt slot loads as the default value; a failed write is logged and
//! reported as `false`. The in-memory document stays authoritative for the
//! session either way, so a failed write means changes may be gone on the next
//! start.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── handbook-data.json   # The whole document (key configurable)
//! └── config.json          # HandbookConfig
//! ```

pub mod backend;
pub mod fs_backend;
pub mod local;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use local::LocalStorage;
pub use mem_backend::MemBackend;
