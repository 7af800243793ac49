use crate::format::note_display_text;
use crate::models::{Note, NoteId};
use icons::{GripVertical, Star};
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Drag callbacks for a reorderable list, keyed by note id.
#[derive(Clone, Copy)]
pub(crate) struct DragHooks {
    pub start: Callback<NoteId>,
    pub over: Callback<NoteId>,
    pub drop: Callback<()>,
    pub end: Callback<()>,
}

/// One note row. Without `drag` the card is read-only (no handle, not draggable).
#[component]
pub(crate) fn NoteCard(
    note: Note,
    on_select: Callback<Note>,
    #[prop(optional)] drag: Option<DragHooks>,
    #[prop(optional)] on_toggle_favorite: Option<Callback<NoteId>>,
    /// Secondary line, e.g. the note's date in search results.
    #[prop(optional, into)]
    meta: Option<String>,
    #[prop(into, optional)] is_dragging: Signal<bool>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let blank = note.is_blank();
    let text = note_display_text(&note.text).to_string();
    let is_favorite = note.is_favorite;
    let note_id = StoredValue::new(note.id.clone());
    let note_sv = StoredValue::new(note);
    let draggable = drag.is_some();
    let draggable_attr = if draggable { "true" } else { "false" };
    let text_class = if blank {
        "truncate text-sm italic text-muted-foreground"
    } else {
        "whitespace-pre-wrap break-words text-sm"
    };
    let star_title = if is_favorite { "Unfavorite" } else { "Favorite" };
    let star_class = if is_favorite {
        "size-4 fill-current text-amber-500".to_string()
    } else {
        "size-4".to_string()
    };
    let grip_class = "size-4".to_string();
    let badge_class = "size-4 fill-current".to_string();

    let row_class = move || {
        tw_merge!(
            "group flex items-start gap-2 rounded-md border border-border bg-background px-3 py-2 text-left transition-colors hover:bg-accent/50 cursor-pointer",
            if is_dragging.get() { "opacity-50 ring-1 ring-primary/30" } else { "" },
            class.clone()
        )
    };

    view! {
        <li
            class=row_class
            draggable=draggable_attr
            on:click=move |_| on_select.run(note_sv.get_value())
            on:dragstart=move |ev: web_sys::DragEvent| {
                let Some(hooks) = drag else { return };
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &note_id.get_value());
                    dt.set_effect_allowed("move");
                }
                hooks.start.run(note_id.get_value());
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                let Some(hooks) = drag else { return };
                ev.prevent_default();
                if let Some(dt) = ev.data_transfer() {
                    dt.set_drop_effect("move");
                }
                hooks.over.run(note_id.get_value());
            }
            on:drop=move |ev: web_sys::DragEvent| {
                let Some(hooks) = drag else { return };
                ev.prevent_default();
                hooks.drop.run(());
            }
            on:dragend=move |_: web_sys::DragEvent| {
                if let Some(hooks) = drag {
                    hooks.end.run(());
                }
            }
        >
            {draggable.then(|| view! {
                <span class="mt-0.5 text-muted-foreground cursor-grab" aria-hidden="true">
                    <GripVertical class=grip_class />
                </span>
            })}

            <div class="min-w-0 flex-1">
                <div class=text_class>{text}</div>
                {meta.map(|m| view! { <div class="text-xs text-muted-foreground">{m}</div> })}
            </div>

            {match on_toggle_favorite {
                Some(toggle) => view! {
                    <button
                        type="button"
                        class="shrink-0 rounded-sm p-0.5 text-muted-foreground hover:text-foreground"
                        title=star_title
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            toggle.run(note_id.get_value());
                        }
                    >
                        <Star class=star_class />
                    </button>
                }
                .into_any(),
                None if is_favorite => view! {
                    <span class="shrink-0 text-amber-500" aria-label="Favorite">
                        <Star class=badge_class />
                    </span>
                }
                .into_any(),
                None => ().into_any(),
            }}
        </li>
    }
}
