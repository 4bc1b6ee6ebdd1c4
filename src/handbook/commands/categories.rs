use crate::commands::rewrite::{at_category, at_page, remove};
use crate::commands::Mutation;
use crate::ids::{self, unique_id};
use crate::model::{Category, HandbookData, Page};
use chrono::{DateTime, Utc};

pub fn add(data: &HandbookData, page_id: &str, name: &str, now: DateTime<Utc>) -> Mutation {
    let mut created = None;
    let (pages, matched) = at_page(&data.pages, page_id, now, |page| {
        let id = unique_id(ids::category_id(&page.id, name), |candidate| {
            page.category(candidate).is_some()
        });
        created = Some(id.clone());

        let mut categories = page.categories.clone();
        categories.push(Category::new(id, name, now));
        Page {
            categories,
            ..page.clone()
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
    name: &str,
    now: DateTime<Utc>,
) -> Mutation {
    let (pages, matched) = at_category(&data.pages, page_id, category_id, now, |category| {
        Category {
            name: name.to_string(),
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
}

pub fn delete(
    data: &HandbookData,
    page_id: &str,
    category_id: &str,
    now: DateTime<Utc>,
) -> Mutation {
    let mut found = false;
    let (pages, _) = at_page(&data.pages, page_id, now, |page| {
        let (categories, hit) = remove(&page.categories, |c| c.id == category_id);
        found |= hit;
        Page {
            categories,
            ..page.clone()
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
