//! # API Facade
//!
//! [`HandbookApi`] is the handbook store: it owns the one in-memory
//! [`HandbookData`] and the [`LocalStorage`] it is persisted through, and is the
//! single entry point UIs call.
//!
//! ## Lifecycle
//!
//! - **Construction** loads the document from storage, falling back to the
//!   built-in default when nothing (or nothing readable) is stored.
//! - **Every mutation** runs the matching command against the current document,
//!   writes the resulting document to storage once, and only then swaps it in.
//! - **Reset** replaces the document with the default and overwrites storage.
//!
//! ## Silent Misses
//!
//! Stale ids are not errors. A mutation whose path does not exist leaves that
//! part of the document alone, still bumps `last_updated`, still persists, and
//! reports `matched = false` on the returned [`CmdResult`].
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `HandbookApi<FsBackend>`
//! - Testing: `HandbookApi<MemBackend>`

use crate::commands::{categories, entries, pages, query, Mutation};
use crate::error::Result;
use crate::model::{Category, Entry, HandbookData, Page};
use crate::store::{LocalStorage, StorageBackend};
use chrono::Utc;
use tracing::debug;

pub struct HandbookApi<B: StorageBackend> {
    storage: LocalStorage<B>,
    key: String,
    defaults: HandbookData,
    data: HandbookData,
}

impl<B: StorageBackend> HandbookApi<B> {
    /// Opens the handbook stored at `key`, seeding the built-in default.
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self::with_defaults(backend, key, HandbookData::seed(Utc::now()))
    }

    /// Opens the handbook stored at `key` with a custom default document.
    pub fn with_defaults(backend: B, key: impl Into<String>, defaults: HandbookData) -> Self {
        let key = key.into();
        let storage = LocalStorage::new(backend);
        let data = storage.load(&key, defaults.clone());
        debug!(key = %key, pages = data.pages.len(), "handbook opened");
        Self {
            storage,
            key,
            defaults,
            data,
        }
    }

    pub fn data(&self) -> &HandbookData {
        &self.data
    }

    pub fn defaults(&self) -> &HandbookData {
        &self.defaults
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        self.storage.backend()
    }

    // --- Pages ---

    pub fn add_page(&mut self, name: &str) -> CmdResult {
        let mutation = pages::add(&self.data, name, Utc::now());
        // Adding to the root always matches, so there is no miss message.
        self.commit(mutation, format!("Page added: {}", name), String::new())
    }

    pub fn update_page(&mut self, page_id: &str, name: &str) -> CmdResult {
        let mutation = pages::update(&self.data, page_id, name, Utc::now());
        self.commit(
            mutation,
            format!("Page renamed: {}", name),
            format!("No page {}; nothing renamed", page_id),
        )
    }

    pub fn delete_page(&mut self, page_id: &str) -> CmdResult {
        let mutation = pages::delete(&self.data, page_id, Utc::now());
        self.commit(
            mutation,
            format!("Page deleted: {}", page_id),
            format!("No page {}; nothing deleted", page_id),
        )
    }

    // --- Categories ---

    pub fn add_category(&mut self, page_id: &str, name: &str) -> CmdResult {
        let mutation = categories::add(&self.data, page_id, name, Utc::now());
        self.commit(
            mutation,
            format!("Category added: {}", name),
            format!("No page {}; category not added", page_id),
        )
    }

    pub fn update_category(&mut self, page_id: &str, category_id: &str, name: &str) -> CmdResult {
        let mutation = categories::update(&self.data, page_id, category_id, name, Utc::now());
        self.commit(
            mutation,
            format!("Category renamed: {}", name),
            format!("No category {} in {}; nothing renamed", category_id, page_id),
        )
    }

    pub fn delete_category(&mut self, page_id: &str, category_id: &str) -> CmdResult {
        let mutation = categories::delete(&self.data, page_id, category_id, Utc::now());
        self.commit(
            mutation,
            format!("Category deleted: {}", category_id),
            format!("No category {} in {}; nothing deleted", category_id, page_id),
        )
    }

    // --- Entries ---

    pub fn add_entry(&mut self, page_id: &str, category_id: &str, draft: &EntryDraft) -> CmdResult {
        let mutation = entries::add(&self.data, page_id, category_id, draft, Utc::now());
        self.commit(
            mutation,
            format!("Entry added: {} ({})", draft.title, draft.kind),
            format!("No category {} in {}; entry not added", category_id, page_id),
        )
    }

    pub fn update_entry(
        &mut self,
        page_id: &str,
        category_id: &str,
        entry_id: &str,
        draft: &EntryDraft,
    ) -> CmdResult {
        let mutation =
            entries::update(&self.data, page_id, category_id, entry_id, draft, Utc::now());
        self.commit(
            mutation,
            format!("Entry updated: {} ({})", draft.title, draft.kind),
            format!("No entry {} in {}; nothing updated", entry_id, category_id),
        )
    }

    pub fn delete_entry(&mut self, page_id: &str, category_id: &str, entry_id: &str) -> CmdResult {
        let mutation = entries::delete(&self.data, page_id, category_id, entry_id, Utc::now());
        self.commit(
            mutation,
            format!("Entry deleted: {}", entry_id),
            format!("No entry {} in {}; nothing deleted", entry_id, category_id),
        )
    }

    // --- Reset ---

    pub fn reset_to_default(&mut self) -> CmdResult {
        self.data = self.storage.reset(&self.key, self.defaults.clone());
        // reset() swallows write failures; read back to tell the caller.
        let persisted = self.storage.load(&self.key, None::<HandbookData>).as_ref()
            == Some(&self.data);
        debug!(key = %self.key, persisted, "handbook reset");

        let mut result = CmdResult {
            matched: true,
            persisted,
            ..CmdResult::default()
        };
        result.add_message(CmdMessage::success("Handbook reset to default content"));
        if !persisted {
            result.add_message(unsaved_warning());
        }
        result
    }

    // --- Queries ---

    pub fn summaries(&self) -> Vec<PageSummary> {
        query::summaries(&self.data)
    }

    pub fn find_page(&self, page_id: &str) -> Result<&Page> {
        query::find_page(&self.data, page_id)
    }

    pub fn find_category(&self, page_id: &str, category_id: &str) -> Result<&Category> {
        query::find_category(&self.data, page_id, category_id)
    }

    pub fn find_entry(&self, page_id: &str, category_id: &str, entry_id: &str) -> Result<&Entry> {
        query::find_entry(&self.data, page_id, category_id, entry_id)
    }

    /// Persists the mutated document, then makes it current.
    fn commit(&mut self, mutation: Mutation, success: String, miss: String) -> CmdResult {
        let Mutation {
            data,
            matched,
            created_id,
        } = mutation;

        let persisted = self.storage.save(&self.key, &data);
        self.data = data;
        debug!(key = %self.key, matched, persisted, "handbook mutated");

        let mut result = CmdResult {
            matched,
            persisted,
            created_id,
            ..CmdResult::default()
        };
        if matched {
            result.add_message(CmdMessage::success(success));
        } else {
            result.add_message(CmdMessage::warning(miss));
        }
        if !persisted {
            result.add_message(unsaved_warning());
        }
        result
    }
}

fn unsaved_warning() -> CmdMessage {
    CmdMessage::warning("Changes could not be saved and will be lost when handbook exits")
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::entries::EntryDraft;
pub use crate::commands::query::PageSummary;
pub use crate::commands::{CmdMessage, CmdResult, HandbookPaths, MessageLevel};
