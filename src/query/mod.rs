//! Read-only projections over the flat note list.
//!
//! These are recomputed on every render; nothing here is stored.

use crate::format::Countdown;
use crate::models::Note;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Case-insensitive substring search, newest date first.
///
/// A blank query matches nothing.
pub(crate) fn search_notes(notes: &[Note], query: &str) -> Vec<Note> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return vec![];
    }

    let mut hits = notes
        .iter()
        .filter(|n| n.text.to_lowercase().contains(&q))
        .cloned()
        .collect::<Vec<_>>();
    hits.sort_by(|a, b| b.date.cmp(&a.date));
    hits
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DayGroup {
    pub date: NaiveDate,
    pub notes: Vec<Note>,
}

impl DayGroup {
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

/// Notes bucketed by day, days ascending, each bucket sorted by `order`.
///
/// `today` always gets a bucket, even an empty one.
pub(crate) fn feed_groups(notes: &[Note], today: NaiveDate) -> Vec<DayGroup> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Note>> = BTreeMap::new();
    by_day.entry(today).or_default();
    for n in notes {
        by_day.entry(n.date).or_default().push(n.clone());
    }

    by_day
        .into_iter()
        .map(|(date, mut notes)| {
            notes.sort_by_key(|n| n.order);
            DayGroup { date, notes }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CountdownEntry {
    pub note: Note,
    pub countdown: Countdown,
}

/// Favorites only, date descending, each tagged with its distance from `today`.
pub(crate) fn countdowns(notes: &[Note], today: NaiveDate) -> Vec<CountdownEntry> {
    let mut favs = notes
        .iter()
        .filter(|n| n.is_favorite)
        .cloned()
        .collect::<Vec<_>>();
    favs.sort_by(|a, b| b.date.cmp(&a.date));
    favs.into_iter()
        .map(|note| CountdownEntry {
            countdown: Countdown::between(note.date, today),
            note,
        })
        .collect()
}
