//! Copy-on-write rewrites over owned collections.
//!
//! Every mutation rebuilds exactly the path from the document root to its
//! target. Elements that do not match pass through unchanged, so a stale id is
//! a silent no-op; the returned flag tells callers whether anything matched.

use crate::model::{Category, Entry, Page};
use chrono::{DateTime, Utc};

/// Maps every element matching `matches` through `transform`, cloning the rest.
pub fn rewrite<T, P, F>(items: &[T], mut matches: P, mut transform: F) -> (Vec<T>, bool)
where
    T: Clone,
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> T,
{
    let mut matched = false;
    let out: Vec<T> = items
        .iter()
        .map(|item| {
            if matches(item) {
                matched = true;
                transform(item)
            } else {
                item.clone()
            }
        })
        .collect();
    (out, matched)
}

/// Drops every element matching `matches`, keeping the order of the rest.
pub fn remove<T, P>(items: &[T], mut matches: P) -> (Vec<T>, bool)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let out: Vec<T> = items.iter().filter(|item| !matches(*item)).cloned().collect();
    let matched = out.len() != items.len();
    (out, matched)
}

/// Rewrites page `page_id` and bumps its `updated_at`.
pub fn at_page<F>(pages: &[Page], page_id: &str, now: DateTime<Utc>, mut f: F) -> (Vec<Page>, bool)
where
    F: FnMut(&Page) -> Page,
{
    rewrite(
        pages,
        |p| p.id == page_id,
        |page| Page {
            updated_at: now,
            ..f(page)
        },
    )
}

/// Rewrites category `category_id` inside page `page_id`.
///
/// The page is bumped whenever it matches, even if the category does not. The
/// flag reports whether the category itself was found.
pub fn at_category<F>(
    pages: &[Page],
    page_id: &str,
    category_id: &str,
    now: DateTime<Utc>,
    mut f: F,
) -> (Vec<Page>, bool)
where
    F: FnMut(&Category) -> Category,
{
    let mut found = false;
    let (pages, _) = at_page(pages, page_id, now, |page| {
        let (categories, hit) = rewrite(
            &page.categories,
            |c| c.id == category_id,
            |category| Category {
                updated_at: now,
                ..f(category)
            },
        );
        found |= hit;
        Page {
            categories,
            ..page.clone()
        }
    });
    (pages, found)
}

/// Rewrites entry `entry_id`, bumping every matched node on the way down.
pub fn at_entry<F>(
    pages: &[Page],
    page_id: &str,
    category_id: &str,
    entry_id: &str,
    now: DateTime<Utc>,
    mut f: F,
) -> (Vec<Page>, bool)
where
    F: FnMut(&Entry) -> Entry,
{
    let mut found = false;
    let (pages, _) = at_category(pages, page_id, category_id, now, |category| {
        let (entries, hit) = rewrite(
            &category.entries,
            |e| e.id == entry_id,
            |entry| Entry {
                updated_at: now,
                ..f(entry)
            },
        );
        found |= hit;
        Category {
            entries,
            ..category.clone()
        }
    });
    (pages, found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_touches_only_matches() {
        let items = vec![1, 2, 3, 2];
        let (out, matched) = rewrite(&items, |n| *n == 2, |n| n * 10);
        assert!(matched);
        assert_eq!(out, vec![1, 20, 3, 20]);
    }

    #[test]
    fn rewrite_without_match_is_identity() {
        let items = vec!["a", "b"];
        let (out, matched) = rewrite(&items, |s| *s == "z", |_| "changed");
        assert!(!matched);
        assert_eq!(out, items);
    }

    #[test]
    fn remove_preserves_order() {
        let items = vec!["a", "b", "c", "d"];
        let (out, matched) = remove(&items, |s| *s == "b");
        assert!(matched);
        assert_eq!(out, vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_without_match() {
        let items = vec![1, 2];
        let (out, matched) = remove(&items, |n| *n == 9);
        assert!(!matched);
        assert_eq!(out, items);
    }
}
