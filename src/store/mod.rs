use crate::error::StoreError;
use crate::models::{Note, NoteId};
use crate::util::new_note_id;
use chrono::NaiveDate;

/// In-memory note collection.
///
/// The mutating methods here are the only way the app changes notes; views get
/// a read-only signal of this plus the `NoteActions` callbacks.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-formed notes (seed data).
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes on `date`, sorted by `order` ascending.
    pub fn notes_on(&self, date: NaiveDate) -> Vec<Note> {
        let mut xs = self
            .notes
            .iter()
            .filter(|n| n.date == date)
            .cloned()
            .collect::<Vec<_>>();
        xs.sort_by_key(|n| n.order);
        xs
    }

    pub fn has_notes_on(&self, date: NaiveDate) -> bool {
        self.notes.iter().any(|n| n.date == date)
    }

    fn count_on(&self, date: NaiveDate) -> usize {
        self.notes.iter().filter(|n| n.date == date).count()
    }

    pub fn create(&mut self, date: NaiveDate, text: impl Into<String>) -> Note {
        let note = Note {
            id: new_note_id(),
            date,
            text: text.into(),
            order: self.count_on(date) as u32,
            is_favorite: false,
        };
        log::debug!("note created id={} date={} order={}", note.id, date, note.order);
        self.notes.push(note.clone());
        note
    }

    /// Replaces the note's text. Returns false if `id` is unknown.
    pub fn update(&mut self, id: &str, text: impl Into<String>) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            log::debug!("update ignored, unknown id={id}");
            return false;
        };
        note.text = text.into();
        log::debug!("note updated id={id}");
        true
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            log::debug!("toggle_favorite ignored, unknown id={id}");
            return false;
        };
        note.is_favorite = !note.is_favorite;
        log::debug!("note favorite id={id} now={}", note.is_favorite);
        true
    }

    /// Removes the note. Other notes on the same day keep their `order` (gaps are
    /// closed by the next reorder of that day).
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = self.notes.len() != before;
        if removed {
            log::debug!("note deleted id={id}");
        } else {
            log::debug!("delete ignored, unknown id={id}");
        }
        removed
    }

    /// Moves the note at `from` to `to` within `date`'s order-sorted list, then
    /// renumbers that day densely from zero.
    pub fn reorder(&mut self, date: NaiveDate, from: usize, to: usize) -> Result<(), StoreError> {
        let mut ids: Vec<NoteId> = self.notes_on(date).into_iter().map(|n| n.id).collect();
        let len = ids.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { date, index, len });
            }
        }

        let moved = ids.remove(from);
        ids.insert(to, moved);

        for (pos, id) in ids.iter().enumerate() {
            if let Some(note) = self.notes.iter_mut().find(|n| &n.id == id) {
                note.order = pos as u32;
            }
        }
        log::debug!("day reordered date={date} from={from} to={to}");
        Ok(())
    }
}
