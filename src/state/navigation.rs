use crate::models::{Note, NoteId};
use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub(crate) enum View {
    #[default]
    Calendar,
    Editor,
    Search,
    Feed,
    Countdowns,
}

impl View {
    /// Views reachable from the tab bar, in display order.
    pub const TABS: [View; 4] = [View::Calendar, View::Search, View::Feed, View::Countdowns];

    pub fn is_tab(self) -> bool {
        self != View::Editor
    }
}

/// Which view is up, which day is selected, and which note the editor targets.
///
/// Every editor exit lands on the calendar; there is no history stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Navigation {
    pub view: View,
    pub selected_date: NaiveDate,
    pub active_note_id: Option<NoteId>,
}

impl Navigation {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: View::Calendar,
            selected_date: today,
            active_note_id: None,
        }
    }

    /// Tab switch. Ignored while editing, and the editor is never a tab target.
    pub fn switch_tab(&mut self, view: View) -> bool {
        if self.view == View::Editor || !view.is_tab() {
            return false;
        }
        self.view = view;
        true
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn open_create(&mut self) {
        self.active_note_id = None;
        self.view = View::Editor;
    }

    pub fn open_edit(&mut self, id: NoteId) {
        self.active_note_id = Some(id);
        self.view = View::Editor;
    }

    /// Opening a note from search, feed or countdowns also moves the selected day.
    pub fn select_note(&mut self, note: &Note) {
        self.selected_date = note.date;
        self.open_edit(note.id.clone());
    }

    pub fn close_editor(&mut self) {
        self.active_note_id = None;
        self.view = View::Calendar;
    }

    pub fn back_to_calendar(&mut self) {
        if self.view == View::Editor {
            self.active_note_id = None;
        }
        self.view = View::Calendar;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn note_on(date: NaiveDate) -> Note {
        Note {
            id: "n1".to_string(),
            date,
            text: "x".to_string(),
            order: 0,
            is_favorite: false,
        }
    }

    #[test]
    fn test_starts_on_calendar_with_today_selected() {
        let nav = Navigation::new(d(2024, 1, 10));
        assert_eq!(nav.view, View::Calendar);
        assert_eq!(nav.selected_date, d(2024, 1, 10));
        assert!(nav.active_note_id.is_none());
    }

    #[test]
    fn test_tabs_switch_between_non_editor_views() {
        let mut nav = Navigation::new(d(2024, 1, 10));
        for v in View::TABS {
            assert!(nav.switch_tab(v));
            assert_eq!(nav.view, v);
        }
        assert!(!nav.switch_tab(View::Editor));
        assert_eq!(nav.view, View::Countdowns);
    }

    #[test]
    fn test_tab_switch_ignored_while_editing() {
        let mut nav = Navigation::new(d(2024, 1, 10));
        nav.open_create();
        assert!(!nav.switch_tab(View::Search));
        assert_eq!(nav.view, View::Editor);
    }

    #[test]
    fn test_create_and_edit_from_calendar() {
        let mut nav = Navigation::new(d(2024, 1, 10));
        nav.open_edit("abc".to_string());
        assert_eq!(nav.view, View::Editor);
        assert_eq!(nav.active_note_id.as_deref(), Some("abc"));

        nav.close_editor();
        nav.open_create();
        assert_eq!(nav.view, View::Editor);
        assert!(nav.active_note_id.is_none());
    }

    #[test]
    fn test_select_note_moves_selected_date_and_opens_editor() {
        for origin in [View::Search, View::Feed, View::Countdowns] {
            let mut nav = Navigation::new(d(2024, 1, 10));
            nav.switch_tab(origin);
            nav.select_note(&note_on(d(2023, 7, 4)));
            assert_eq!(nav.view, View::Editor);
            assert_eq!(nav.selected_date, d(2023, 7, 4));
            assert_eq!(nav.active_note_id.as_deref(), Some("n1"));

            nav.close_editor();
            assert_eq!(nav.view, View::Calendar, "editor exit from {origin} lands on calendar");
            assert!(nav.active_note_id.is_none());
            assert_eq!(nav.selected_date, d(2023, 7, 4));
        }
    }

    #[test]
    fn test_back_to_calendar_from_search_and_feed() {
        let mut nav = Navigation::new(d(2024, 1, 10));
        nav.switch_tab(View::Search);
        nav.back_to_calendar();
        assert_eq!(nav.view, View::Calendar);
        nav.switch_tab(View::Feed);
        nav.back_to_calendar();
        assert_eq!(nav.view, View::Calendar);
    }

    #[test]
    fn test_view_labels_and_tab_membership() {
        assert_eq!(View::Countdowns.to_string(), "Countdowns");
        let tabs: Vec<View> = View::iter().filter(|v| v.is_tab()).collect();
        assert_eq!(tabs, View::TABS.to_vec());
    }
}
