//! Read-only lookups. Unlike the mutating commands, these report missing ids as
//! errors since callers asked for something specific to show.

use crate::error::{HandbookError, Result};
use crate::model::{Category, Entry, HandbookData, Page};
use chrono::{DateTime, Utc};

/// Landing-page card for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub id: String,
    pub name: String,
    pub category_count: usize,
    pub entry_count: usize,
    pub updated_at: DateTime<Utc>,
}

pub fn summaries(data: &HandbookData) -> Vec<PageSummary> {
    data.pages
        .iter()
        .map(|page| PageSummary {
            id: page.id.clone(),
            name: page.name.clone(),
            category_count: page.categories.len(),
            entry_count: page.entry_count(),
            updated_at: page.updated_at,
        })
        .collect()
}

pub fn find_page<'a>(data: &'a HandbookData, page_id: &str) -> Result<&'a Page> {
    data.page(page_id)
        .ok_or_else(|| HandbookError::PageNotFound(page_id.to_string()))
}

pub fn find_category<'a>(
    data: &'a HandbookData,
    page_id: &str,
    category_id: &str,
) -> Result<&'a Category> {
    find_page(data, page_id)?
        .category(category_id)
        .ok_or_else(|| HandbookError::CategoryNotFound {
            page: page_id.to_string(),
            category: category_id.to_string(),
        })
}

pub fn find_entry<'a>(
    data: &'a HandbookData,
    page_id: &str,
    category_id: &str,
    entry_id: &str,
) -> Result<&'a Entry> {
    find_category(data, page_id, category_id)?
        .entry(entry_id)
        .ok_or_else(|| HandbookError::EntryNotFound {
            category: category_id.to_string(),
            entry: entry_id.to_string(),
        })
}
