use crate::error::Result;

/// Abstract interface for a durable key-value slot store.
///
/// Backends move opaque strings; serialization is handled by
/// [`LocalStorage`](super::LocalStorage). Methods take `&self` because the
/// handbook is single-threaded and in-memory backends use interior mutability.
pub trait StorageBackend {
    /// Read the raw value stored at `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only when the slot exists but cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value at `key`.
    /// MUST be atomic: a reader sees either the old value or the new one.
    fn write(&self, key: &str, raw: &str) -> Result<()>;
}
