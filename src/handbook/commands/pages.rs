use crate::commands::rewrite::{at_page, remove};
use crate::commands::Mutation;
use crate::ids::{page_id, unique_id};
use crate::model::{HandbookData, Page};
use chrono::{DateTime, Utc};

pub fn add(data: &HandbookData, name: &str, now: DateTime<Utc>) -> Mutation {
    let id = unique_id(page_id(name), |candidate| data.page(candidate).is_some());

    let mut pages = data.pages.clone();
    pages.push(Page::new(id.clone(), name, now));

    Mutation::new(
        HandbookData {
            pages,
            last_updated: now,
        },
        true,
    )
    .with_created_id(Some(id))
}

pub fn update(data: &HandbookData, page_id: &str, name: &str, now: DateTime<Utc>) -> Mutation {
    let (pages, matched) = at_page(&data.pages, page_id, now, |page| Page {
        name: name.to_string(),
        ..page.clone()
    });

    Mutation::new(
        HandbookData {
            pages,
            last_updated: now,
        },
        matched,
    )
}

pub fn delete(data: &HandbookData, page_id: &str, now: DateTime<Utc>) -> Mutation {
    let (pages, matched) = remove(&data.pages, |p| p.id == page_id);

    Mutation::new(
        HandbookData {
            pages,
            last_updated: now,
        },
        matched,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    fn t1() -> DateTime<Utc> {
        t0() + Duration::minutes(5)
    }

    #[test]
    fn add_appends_page_with_slug_id() {
        let data = HandbookData::seed(t0());
        let m = add(&data, "Night Shift", t1());

        assert!(m.matched);
        assert_eq!(m.created_id.as_deref(), Some("night-shift"));
        assert_eq!(m.data.pages.len(), data.pages.len() + 1);

        let page = m.data.page("night-shift").unwrap();
        assert_eq!(page.name, "Night Shift");
        assert!(page.categories.is_empty());
        assert_eq!(page.created_at, t1());
        assert_eq!(m.data.pages.last().unwrap().id, "night-shift");
        assert_eq!(m.data.last_updated, t1());
    }

    #[test]
    fn add_does_not_modify_input() {
        let data = HandbookData::seed(t0());
        let before = data.clone();
        let _ = add(&data, "Night Shift", t1());
        assert_eq!(data, before);
    }

    #[test]
    fn add_with_colliding_slug_gets_suffix() {
        let data = HandbookData::seed(t0());
        let m = add(&data, "general   HANDBOOK", t1());
        assert_eq!(m.created_id.as_deref(), Some("general-handbook-2"));
        assert_eq!(m.data.pages.len(), 3);
    }

    #[test]
    fn rename_keeps_id() {
        let data = HandbookData::seed(t0());
        let m = update(&data, "training-host", "Trainer Notes", t1());

        assert!(m.matched);
        let page = m.data.page("training-host").unwrap();
        assert_eq!(page.name, "Trainer Notes");
        assert_eq!(page.updated_at, t1());
        assert_eq!(page.created_at, t0());
        assert_eq!(m.data.last_updated, t1());
    }

    #[test]
    fn rename_missing_page_only_bumps_document() {
        let data = HandbookData::seed(t0());
        let m = update(&data, "nope", "Whatever", t1());

        assert!(!m.matched);
        assert_eq!(m.data.pages, data.pages);
        assert_eq!(m.data.last_updated, t1());
    }

    #[test]
    fn delete_removes_only_target() {
        let data = HandbookData::seed(t0());
        let m = delete(&data, "general-handbook", t1());

        assert!(m.matched);
        assert_eq!(m.data.pages.len(), 1);
        assert_eq!(m.data.pages[0], data.pages[1]);
    }

    #[test]
    fn delete_missing_page_is_noop() {
        let data = HandbookData::seed(t0());
        let m = delete(&data, "nope", t1());

        assert!(!m.matched);
        assert_eq!(m.data.pages, data.pages);
        assert_eq!(m.data.last_updated, t1());
    }
}
