//! Core data types: the [`HandbookData`] document and the pages, categories and
//! entries it owns.
//!
//! The serialized form keeps the camelCase field names of the persisted blob
//! (`createdAt`, `updatedAt`, `lastUpdated`). Timestamps are `DateTime<Utc>` and
//! travel as RFC 3339 strings, so deserializing a document brings them back as
//! structured values rather than raw strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an entry behaves in the UI. The store treats both kinds identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Clicking the entry copies its content to the clipboard.
    #[default]
    Copyable,
    /// Static informational blurb.
    Info,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Copyable => write!(f, "copyable"),
            EntryKind::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub content: String,
    // Documents written before entry kinds existed have no "type" field.
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        id: String,
        title: impl Into<String>,
        content: impl Into<String>,
        kind: EntryKind,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            kind,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub entries: Vec<Entry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: String, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn entry(&self, entry_id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(id: String, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

/// The root document. This is the single aggregate that gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandbookData {
    pub pages: Vec<Page>,
    pub last_updated: DateTime<Utc>,
}

impl HandbookData {
    /// The built-in starter document used when nothing is stored yet, and
    /// restored by a reset.
    pub fn seed(now: DateTime<Utc>) -> Self {
        let mut reception = Category::new("reception".to_string(), "Reception", now);
        reception.entries.push(Entry::new(
            "welcome-greeting".to_string(),
            "Welcome Greeting",
            "Good [morning/afternoon/evening], welcome to our hotel! How may I assist you today?",
            EntryKind::Copyable,
            now,
        ));

        let mut general = Page::new("general-handbook".to_string(), "General Handbook", now);
        general.categories.push(reception);

        let training = Page::new("training-host".to_string(), "Training Host", now);

        Self {
            pages: vec![general, training],
            last_updated: now,
        }
    }

    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }
}
