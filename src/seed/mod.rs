use crate::error::SeedError;
use crate::models::Note;
use crate::store::NoteStore;
use crate::util::new_note_id;
use chrono::{Days, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;

const DEMO_NOTES_JSON: &str = include_str!("../../assets/seed_notes.json");

/// Demo entry positioned relative to "today" so the calendar always has
/// past, present and upcoming notes.
#[derive(Deserialize, Clone, Debug)]
struct SeedNote {
    #[serde(rename = "dayOffset")]
    day_offset: i64,
    text: String,
    #[serde(rename = "isFavorite", default)]
    is_favorite: bool,
}

fn shift(today: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        today.checked_add_days(days)
    } else {
        today.checked_sub_days(days)
    }
}

/// Parses seed JSON into a store. Notes sharing a day get dense orders in file order.
pub(crate) fn parse_seed(json: &str, today: NaiveDate) -> Result<NoteStore, SeedError> {
    let seeds: Vec<SeedNote> = serde_json::from_str(json)?;

    let mut next_order: HashMap<NaiveDate, u32> = HashMap::new();
    let mut notes = Vec::with_capacity(seeds.len());
    for s in seeds {
        let date = shift(today, s.day_offset).ok_or(SeedError::OffsetOutOfRange(s.day_offset))?;
        let order = next_order.entry(date).or_insert(0);
        notes.push(Note {
            id: new_note_id(),
            date,
            text: s.text,
            order: *order,
            is_favorite: s.is_favorite,
        });
        *order += 1;
    }

    Ok(NoteStore::from_notes(notes))
}

pub(crate) fn demo_store(today: NaiveDate) -> Result<NoteStore, SeedError> {
    parse_seed(DEMO_NOTES_JSON, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_demo_seed_parses_and_has_today_notes() {
        let today = d(2024, 1, 10);
        let store = demo_store(today).expect("bundled seed should parse");
        assert!(!store.is_empty());
        assert!(store.has_notes_on(today));
        assert!(store.notes().iter().any(|n| n.is_favorite && n.date > today));
        assert!(store.notes().iter().any(|n| n.is_favorite && n.date < today));
    }

    #[test]
    fn test_seed_orders_are_dense_per_day() {
        let json = r#"[
            {"dayOffset": 0, "text": "a"},
            {"dayOffset": -1, "text": "b", "isFavorite": true},
            {"dayOffset": 0, "text": "c"}
        ]"#;
        let today = d(2024, 3, 1);
        let store = parse_seed(json, today).expect("should parse");
        let texts: Vec<(String, u32)> = store
            .notes_on(today)
            .into_iter()
            .map(|n| (n.text, n.order))
            .collect();
        assert_eq!(texts, vec![("a".to_string(), 0), ("c".to_string(), 1)]);

        let yesterday = store.notes_on(d(2024, 2, 29));
        assert_eq!(yesterday.len(), 1);
        assert!(yesterday[0].is_favorite);
        assert_eq!(yesterday[0].order, 0);
    }

    #[test]
    fn test_seed_rejects_bad_json() {
        let err = parse_seed("{not json", d(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, SeedError::Decode(_)));
    }

    #[test]
    fn test_seed_rejects_absurd_offsets() {
        let json = r#"[{"dayOffset": 9223372036854775807, "text": "far"}]"#;
        let err = parse_seed(json, d(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, SeedError::OffsetOutOfRange(_)));
    }
}
