use super::backend::StorageBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

/// JSON value persistence over a [`StorageBackend`], with a fallback default.
///
/// None of these methods return errors: storage problems are logged and
/// absorbed here so that callers keep working from their in-memory value.
pub struct LocalStorage<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> LocalStorage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads the value at `key`, or `default` if it is absent, unreadable or
    /// does not deserialize into `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "nothing stored, using default");
                return default;
            }
            Err(e) => {
                warn!(key, error = %e, "could not read storage, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, bytes = raw.len(), "loaded stored value");
                value
            }
            Err(e) => {
                warn!(key, error = %e, "stored value is unreadable, using default");
                default
            }
        }
    }

    /// Serializes and writes `value`. Returns whether the write went through.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                error!(key, error = %e, "could not serialize value");
                return false;
            }
        };

        match self.backend.write(key, &raw) {
            Ok(()) => {
                debug!(key, bytes = raw.len(), "saved value");
                true
            }
            Err(e) => {
                error!(key, error = %e, "could not write storage; keeping in-memory value");
                false
            }
        }
    }

    /// Overwrites `key` with `default` and hands it back.
    pub fn reset<T: Serialize>(&self, key: &str, default: T) -> T {
        self.save(key, &default);
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HandbookData;
    use crate::store::mem_backend::MemBackend;
    use chrono::{TimeZone, Utc};

    const KEY: &str = "handbook-data";

    fn doc() -> HandbookData {
        HandbookData::seed(Utc.with_ymd_and_hms(2024, 2, 2, 12, 0, 0).unwrap())
    }

    fn fallback() -> HandbookData {
        HandbookData {
            pages: Vec::new(),
            last_updated: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn absent_key_returns_default() {
        let storage = LocalStorage::new(MemBackend::new());
        assert_eq!(storage.load(KEY, fallback()), fallback());
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = LocalStorage::new(MemBackend::new());
        assert!(storage.save(KEY, &doc()));

        let loaded: HandbookData = storage.load(KEY, fallback());
        assert_eq!(loaded, doc());
        assert_eq!(loaded.last_updated, doc().last_updated);
    }

    #[test]
    fn round_trip_keeps_sub_second_precision() {
        let storage = LocalStorage::new(MemBackend::new());
        let mut value = doc();
        value.last_updated = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        storage.save(KEY, &value);

        let loaded: HandbookData = storage.load(KEY, fallback());
        assert_eq!(loaded.last_updated.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn corrupt_value_returns_default() {
        let backend = MemBackend::new();
        backend.insert_raw(KEY, "{not json");
        let storage = LocalStorage::new(backend);

        assert_eq!(storage.load(KEY, fallback()), fallback());
    }

    #[test]
    fn wrong_shape_returns_default() {
        let backend = MemBackend::new();
        backend.insert_raw(KEY, r#"{"pages": "nope"}"#);
        let storage = LocalStorage::new(backend);

        assert_eq!(storage.load(KEY, fallback()), fallback());
    }

    #[test]
    fn read_error_returns_default() {
        let backend = MemBackend::new();
        backend.insert_raw(KEY, &serde_json::to_string(&doc()).unwrap());
        backend.set_simulate_read_error(true);
        let storage = LocalStorage::new(backend);

        assert_eq!(storage.load(KEY, fallback()), fallback());
    }

    #[test]
    fn failed_write_is_reported_not_raised() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let storage = LocalStorage::new(backend);

        assert!(!storage.save(KEY, &doc()));
        assert!(storage.backend().raw(KEY).is_none());
    }

    #[test]
    fn reset_overwrites_and_returns_default() {
        let storage = LocalStorage::new(MemBackend::new());
        storage.save(KEY, &doc());

        let value = storage.reset(KEY, fallback());
        assert_eq!(value, fallback());
        assert_eq!(storage.load(KEY, doc()), fallback());
    }
}
