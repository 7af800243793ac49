use super::Navigation;
use crate::models::{Note, NoteId};
use crate::store::NoteStore;
use chrono::NaiveDate;

/// What the editor is working on, fixed when it opens.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum EditorMode {
    Create { date: NaiveDate },
    Edit(Note),
}

impl EditorMode {
    /// An active id that no longer resolves (note deleted meanwhile) opens a
    /// new note on the selected day.
    pub fn resolve(nav: &Navigation, store: &NoteStore) -> Self {
        match nav.active_note_id.as_deref().and_then(|id| store.get(id)) {
            Some(note) => EditorMode::Edit(note.clone()),
            None => EditorMode::Create {
                date: nav.selected_date,
            },
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, EditorMode::Create { .. })
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            EditorMode::Create { date } => *date,
            EditorMode::Edit(note) => note.date,
        }
    }

    pub fn note_id(&self) -> Option<&NoteId> {
        match self {
            EditorMode::Create { .. } => None,
            EditorMode::Edit(note) => Some(&note.id),
        }
    }

    pub fn initial_text(&self) -> String {
        match self {
            EditorMode::Create { .. } => String::new(),
            EditorMode::Edit(note) => note.text.clone(),
        }
    }

    /// Save: creates on the editor's day, or replaces the edited note's text.
    pub fn save(&self, store: &mut NoteStore, text: String) {
        match self {
            EditorMode::Create { date } => {
                store.create(*date, text);
            }
            EditorMode::Edit(note) => {
                store.update(&note.id, text);
            }
        }
    }
}

/// Delete confirmation state. Only an open prompt can be confirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum DeletePrompt {
    #[default]
    Closed,
    Open,
}

impl DeletePrompt {
    pub fn is_open(self) -> bool {
        self == DeletePrompt::Open
    }

    pub fn open(&mut self) {
        *self = DeletePrompt::Open;
    }

    pub fn decline(&mut self) {
        *self = DeletePrompt::Closed;
    }

    /// Closes the prompt; true when the delete should go ahead.
    pub fn confirm(&mut self) -> bool {
        let go = self.is_open();
        *self = DeletePrompt::Closed;
        go
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::View;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_resolve_edit_mode_for_known_note() {
        let mut store = NoteStore::new();
        let note = store.create(d(2024, 1, 10), "hello");
        let mut nav = Navigation::new(d(2024, 3, 1));
        nav.open_edit(note.id.clone());

        let mode = EditorMode::resolve(&nav, &store);
        assert!(!mode.is_new());
        assert_eq!(mode.note_id(), Some(&note.id));
        assert_eq!(mode.date(), d(2024, 1, 10));
        assert_eq!(mode.initial_text(), "hello");
    }

    #[test]
    fn test_stale_active_id_falls_back_to_new_note() {
        let mut store = NoteStore::new();
        let note = store.create(d(2024, 1, 10), "gone soon");
        let mut nav = Navigation::new(d(2024, 1, 12));
        nav.open_edit(note.id.clone());
        store.delete(&note.id);

        let mode = EditorMode::resolve(&nav, &store);
        assert_eq!(mode, EditorMode::Create { date: d(2024, 1, 12) });
        assert!(mode.note_id().is_none());
        assert_eq!(mode.initial_text(), "");
    }

    #[test]
    fn test_save_in_new_mode_creates_on_selected_date() {
        let mut store = NoteStore::new();
        store.create(d(2024, 1, 10), "first");
        let mut nav = Navigation::new(d(2024, 1, 10));
        nav.open_create();

        let mode = EditorMode::resolve(&nav, &store);
        mode.save(&mut store, "second".to_string());

        let day = store.notes_on(d(2024, 1, 10));
        assert_eq!(day.len(), 2);
        assert_eq!(day[1].text, "second");
        assert_eq!(day[1].order, 1);
        assert!(!day[1].is_favorite);
    }

    #[test]
    fn test_save_in_edit_mode_replaces_text_only() {
        let mut store = NoteStore::new();
        let note = store.create(d(2024, 1, 10), "draft");
        store.toggle_favorite(&note.id);
        let mut nav = Navigation::new(d(2024, 1, 10));
        nav.open_edit(note.id.clone());

        EditorMode::resolve(&nav, &store).save(&mut store, "final".to_string());

        assert_eq!(store.len(), 1);
        let saved = store.get(&note.id).unwrap();
        assert_eq!(saved.text, "final");
        assert!(saved.is_favorite);
        assert_eq!(saved.order, 0);
    }

    #[test]
    fn test_declining_delete_leaves_everything_unchanged() {
        let mut store = NoteStore::new();
        let note = store.create(d(2024, 1, 10), "keep me");
        let mut nav = Navigation::new(d(2024, 1, 10));
        nav.open_edit(note.id.clone());
        let (store_before, nav_before) = (store.clone(), nav.clone());

        let mut prompt = DeletePrompt::default();
        prompt.open();
        assert!(prompt.is_open());
        prompt.decline();

        assert!(!prompt.is_open());
        assert!(!prompt.confirm(), "a declined prompt cannot be confirmed");
        assert_eq!(store, store_before);
        assert_eq!(nav, nav_before);
        assert_eq!(nav.view, View::Editor);
    }

    #[test]
    fn test_confirming_open_prompt_allows_delete() {
        let mut prompt = DeletePrompt::default();
        prompt.open();
        assert!(prompt.confirm());
        assert_eq!(prompt, DeletePrompt::Closed);
    }
}
