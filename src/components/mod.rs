pub mod note_card;
pub mod ui;

pub(crate) use note_card::{DragHooks, NoteCard};
