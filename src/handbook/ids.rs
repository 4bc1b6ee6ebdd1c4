//! # Identifier derivation
//!
//! Ids are derived once, at creation time, and never recomputed on rename:
//!
//! - Page: `slug(name)`, e.g. `"Night Shift"` → `night-shift`
//! - Category: `{page_id}-{slug(name)}`
//! - Entry: `{category_id}-{unix millis}`
//!
//! Two names can slug to the same id (`"Front Desk"` and `"front  desk"`), and two
//! entries can be created within the same millisecond. [`unique_id`] resolves
//! these by appending `-2`, `-3`, ... against the ids already present in the
//! target collection.

use chrono::{DateTime, Utc};

/// Lower-cases `name` and replaces each run of whitespace with a single hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }

    slug
}

pub fn page_id(name: &str) -> String {
    slugify(name)
}

pub fn category_id(page_id: &str, name: &str) -> String {
    format!("{}-{}", page_id, slugify(name))
}

pub fn entry_id(category_id: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}", category_id, now.timestamp_millis())
}

/// Returns `candidate` if free, otherwise the first `candidate-N` (N >= 2) that is.
pub fn unique_id(candidate: String, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(&candidate) {
        return candidate;
    }

    let mut n = 2;
    loop {
        let next = format!("{}-{}", candidate, n);
        if !is_taken(&next) {
            return next;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slugify("Night Shift"), "night-shift");
        assert_eq!(slugify("Emergency   Contacts"), "emergency-contacts");
        assert_eq!(slugify("Tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn slug_keeps_edge_whitespace_as_hyphens() {
        assert_eq!(slugify(" Lobby "), "-lobby-");
    }

    #[test]
    fn slug_keeps_punctuation() {
        assert_eq!(slugify("Check-in / Out"), "check-in-/-out");
    }

    #[test]
    fn category_id_is_prefixed_by_page() {
        assert_eq!(
            category_id("night-shift", "Emergency Contacts"),
            "night-shift-emergency-contacts"
        );
    }

    #[test]
    fn entry_id_uses_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(entry_id("reception", now), "reception-1700000000123");
    }

    #[test]
    fn colliding_names_share_a_slug() {
        assert_eq!(page_id("Front Desk"), page_id("front   desk"));
    }

    #[test]
    fn unique_id_appends_counter() {
        let taken = ["front-desk", "front-desk-2"];
        let id = unique_id("front-desk".to_string(), |c| taken.contains(&c));
        assert_eq!(id, "front-desk-3");
    }

    #[test]
    fn unique_id_keeps_free_candidate() {
        let id = unique_id("lobby".to_string(), |_| false);
        assert_eq!(id, "lobby");
    }
}
