use crate::commands::rewrite::{at_category, at_entry, remove};
use crate::commands::Mutation;
use crate::ids::{self, unique_id};
use crate::model::{Category, Entry, EntryKind, HandbookData};
use chrono::{DateTime, Utc};

/// Fields supplied when creating or replacing an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub kind: EntryKind,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind,
        }
    }
}

pub fn add(
    data: &HandbookData,
    page_id: &str,
    category_id: &str,
    draft: &EntryDraft,
    now: DateTime<Utc>,
) -> Mutation {
    let mut created = None;
    let (pages, matched) = at_category(&data.pages, page_id, category_id, now, |category| {
        let id = unique_id(ids::entry_id(&category.id, now), |candidate| {
            category.entry(candidate).is_some()
        });
        created = Some(id.clone());

        let mut entries = category.entries.clone();
        entries.push(Entry::new(
            id,
            draft.title.as_str(),
            draft.content.as_str(),
            draft.kind,
            now,
        ));
        Category {
            entries,
            ..category.clone()
        }
    });

    Mutation::new(
        HandbookData {
            pages,
            last_updated: now,
        },
        matched,
    )
    .with_created_id(created)
}

pub fn update(
    data: &HandbookData,
    page_id: &str,
    category_id: &str,
    entry_id: &str,
    draft: &EntryDraft,
    now: DateTime<Utc>,
) -> Mutation {
    let (pages, matched) = at_entry(&data.pages, page_id, category_id, entry_id, now, |entry| {
        Entry {
            title: draft.title.clone(),
            content: draft.content.clone(),
            kind: draft.kind,
            ..entry.clone()
        }
    });

    Mutation::new(
        HandbookData {
            pages,
            last_updated: now,
        },
        matched,
    )
}

pub fn delete(
    data: &HandbookData,
    page_id: &str,
    category_id: &str,
    entry_id: &str,
    now: DateTime<Utc>,
) -> Mutation {
    let mut found = false;
    let (pages, _) = at_category(&data.pages, page_id, category_id, now, |category| {
        let (entries, hit) = remove(&category.entries, |e| e.id == entry_id);
        found |= hit;
        Category {
            entries,
            ..category.clone()
        }
    });

    Mutation::new(
        HandbookData {
            pages,
            last_updated: now,
        },
        found,
    )
}
