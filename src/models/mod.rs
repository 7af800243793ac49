use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub(crate) type NoteId = String;

/// A single journal entry pinned to one calendar day.
///
/// `order` is only meaningful relative to other notes on the same `date`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Note {
    pub id: NoteId,
    pub date: NaiveDate,
    pub text: String,
    pub order: u32,

    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

impl Note {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_serializes_favorite_flag_camel_case() {
        let note = Note {
            id: "n1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            text: "hello".to_string(),
            order: 0,
            is_favorite: true,
        };
        let v = serde_json::to_value(&note).expect("should serialize");
        assert_eq!(v["isFavorite"], true);
        assert_eq!(v["date"], "2024-01-10");
    }

    #[test]
    fn test_note_is_blank_ignores_whitespace() {
        let mut note = Note {
            id: "n1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            text: "  \n".to_string(),
            order: 0,
            is_favorite: false,
        };
        assert!(note.is_blank());
        note.text = "x".to_string();
        assert!(!note.is_blank());
    }
}
