mod editor;
mod navigation;

pub(crate) use editor::{DeletePrompt, EditorMode};
pub(crate) use navigation::{Navigation, View};

use crate::config::AppConfig;
use crate::models::{Note, NoteId};
use crate::store::NoteStore;
use chrono::NaiveDate;
use leptos::prelude::*;

/// Root-owned state, read-only from the views' side.
///
/// Writes go through `NoteActions` / `NavActions`, which hold the write halves.
#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub notes: ReadSignal<NoteStore>,
    pub nav: ReadSignal<Navigation>,

    /// Search box contents. Kept at the root so it survives an editor round trip.
    pub search_query: RwSignal<String>,

    pub config: StoredValue<AppConfig>,
}

impl AppState {
    pub fn selected_date(&self) -> NaiveDate {
        self.nav.with(|n| n.selected_date)
    }

    pub fn selected_date_untracked(&self) -> NaiveDate {
        self.nav.with_untracked(|n| n.selected_date)
    }

    pub fn editor_mode_untracked(&self) -> EditorMode {
        self.nav
            .with_untracked(|n| self.notes.with_untracked(|s| EditorMode::resolve(n, s)))
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

/// Note mutations exposed to views.
#[derive(Clone, Copy)]
pub(crate) struct NoteActions {
    pub create: Callback<(NaiveDate, String)>,
    pub update: Callback<(NoteId, String)>,
    pub toggle_favorite: Callback<NoteId>,
    pub delete: Callback<NoteId>,
    pub reorder: Callback<(NaiveDate, usize, usize)>,
    pub save: Callback<(EditorMode, String)>,
}

impl NoteActions {
    pub fn new(notes: WriteSignal<NoteStore>) -> Self {
        Self {
            create: Callback::new(move |(date, text): (NaiveDate, String)| {
                notes.update(|s| {
                    s.create(date, text);
                });
            }),
            update: Callback::new(move |(id, text): (NoteId, String)| {
                notes.update(|s| {
                    s.update(&id, text);
                });
            }),
            toggle_favorite: Callback::new(move |id: NoteId| {
                notes.update(|s| {
                    s.toggle_favorite(&id);
                });
            }),
            delete: Callback::new(move |id: NoteId| {
                notes.update(|s| {
                    s.delete(&id);
                });
            }),
            reorder: Callback::new(move |(date, from, to): (NaiveDate, usize, usize)| {
                if let Some(Err(err)) = notes.try_update(|s| s.reorder(date, from, to)) {
                    log::warn!("reorder rejected: {err}");
                }
            }),
            save: Callback::new(move |(mode, text): (EditorMode, String)| {
                notes.update(|s| mode.save(s, text));
            }),
        }
    }
}

/// View transitions exposed to views.
#[derive(Clone, Copy)]
pub(crate) struct NavActions {
    pub switch_tab: Callback<View>,
    pub select_date: Callback<NaiveDate>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<NoteId>,
    pub select_note: Callback<Note>,
    pub close_editor: Callback<()>,
    pub back_to_calendar: Callback<()>,
}

impl NavActions {
    pub fn new(nav: WriteSignal<Navigation>) -> Self {
        Self {
            switch_tab: Callback::new(move |view: View| {
                let switched = nav.try_update(|n| n.switch_tab(view)).unwrap_or(false);
                if !switched {
                    log::debug!("tab switch to {view} ignored");
                }
            }),
            select_date: Callback::new(move |date: NaiveDate| nav.update(|n| n.select_date(date))),
            open_create: Callback::new(move |_| nav.update(|n| n.open_create())),
            open_edit: Callback::new(move |id: NoteId| nav.update(|n| n.open_edit(id))),
            select_note: Callback::new(move |note: Note| nav.update(|n| n.select_note(&note))),
            close_editor: Callback::new(move |_| nav.update(|n| n.close_editor())),
            back_to_calendar: Callback::new(move |_| nav.update(|n| n.back_to_calendar())),
        }
    }
}
