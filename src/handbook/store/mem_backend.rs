use super::backend::StorageBackend;
use crate::error::{HandbookError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since handbook is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation (e.g. a full or disabled storage area).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation (e.g. an unreadable storage area).
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Test helper to plant a raw value, bypassing serialization.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    /// Test helper to inspect the raw value at `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(HandbookError::Store("Simulated read error".to_string()));
        }
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(HandbookError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::api::HandbookApi;
    use crate::commands::entries::EntryDraft;
    use crate::model::EntryKind;

    pub const KEY: &str = "handbook-data";

    /// Builds a `HandbookApi` over a fresh `MemBackend`, seeded step by step.
    pub struct HandbookFixture {
        pub api: HandbookApi<MemBackend>,
    }

    impl Default for HandbookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HandbookFixture {
        pub fn new() -> Self {
            Self {
                api: HandbookApi::new(MemBackend::new(), KEY),
            }
        }

        pub fn with_page(mut self, name: &str) -> Self {
            self.api.add_page(name);
            self
        }

        pub fn with_category(mut self, page_id: &str, name: &str) -> Self {
            self.api.add_category(page_id, name);
            self
        }

        pub fn with_entries(mut self, page_id: &str, category_id: &str, count: usize) -> Self {
            for i in 0..count {
                let draft = EntryDraft::new(
                    format!("Entry {}", i + 1),
                    format!("Content for entry {}", i + 1),
                    EntryKind::Copyable,
                );
                self.api.add_entry(page_id, category_id, &draft);
            }
            self
        }
    }
}
