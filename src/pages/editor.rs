use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardDescription, CardHeader, CardTitle, Label, Textarea,
};
use crate::format::long_date;
use crate::state::{AppContext, DeletePrompt, NavActions, NoteActions};
use icons::{ArrowLeft, Star, Trash2};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Create/edit screen. Text edits stay local until Save; every exit returns to
/// the calendar.
#[component]
pub(crate) fn EditorPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let note_actions = expect_context::<NoteActions>();
    let nav_actions = expect_context::<NavActions>();

    // Snapshot at mount. A stale id (note deleted meanwhile) falls back to new-note mode.
    let mode = StoredValue::new(app_state.0.editor_mode_untracked());
    let note_id = StoredValue::new(mode.with_value(|m| m.note_id().cloned()));
    let is_new = mode.with_value(|m| m.is_new());
    let date = mode.with_value(|m| m.date());

    let text: RwSignal<String> = RwSignal::new(mode.with_value(|m| m.initial_text()));
    let prompt: RwSignal<DeletePrompt> = RwSignal::new(DeletePrompt::default());
    let textarea_ref: NodeRef<html::Textarea> = NodeRef::new();

    // Favorite toggles apply straight to the store, so read the live flag.
    let is_favorite = move || {
        note_id
            .get_value()
            .and_then(|id| app_state.0.notes.with(|s| s.get(&id).map(|n| n.is_favorite)))
            .unwrap_or(false)
    };

    let save = move || {
        note_actions.save.run((mode.get_value(), text.get_untracked()));
        nav_actions.close_editor.run(());
    };

    let close = move || nav_actions.close_editor.run(());

    let on_toggle_favorite = move |_| {
        if let Some(id) = note_id.get_value() {
            note_actions.toggle_favorite.run(id);
        }
    };

    let on_confirm_delete = move |_| {
        let go = prompt.try_update(|p| p.confirm()).unwrap_or(false);
        if let Some(id) = note_id.get_value().filter(|_| go) {
            note_actions.delete.run(id);
            nav_actions.close_editor.run(());
        }
    };

    Effect::new(move |_| {
        if let Some(el) = textarea_ref.get() {
            let _ = el.focus();
        }
    });

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Escape" {
            ev.prevent_default();
            if prompt.get_untracked().is_open() {
                prompt.update(|p| p.decline());
            } else {
                close();
            }
            return;
        }
        if key == "Enter" && (ev.meta_key() || ev.ctrl_key()) && !prompt.get_untracked().is_open() {
            ev.prevent_default();
            save();
        }
    });
    on_cleanup(move || key_handle.remove());

    let star_class = move || {
        if is_favorite() {
            "size-4 fill-current text-amber-500".to_string()
        } else {
            "size-4".to_string()
        }
    };

    view! {
        <div class="flex h-full flex-col gap-4">
            <div class="flex items-center justify-between gap-2">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:title="Close without saving"
                    on:click=move |_| close()
                >
                    <ArrowLeft class="size-4" />
                    "Back"
                </Button>

                <div class="flex items-center gap-1">
                    <Show when=move || !is_new fallback=|| ().into_view()>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            attr:title=move || if is_favorite() { "Unfavorite" } else { "Favorite" }
                            on:click=on_toggle_favorite
                        >
                            {move || view! { <Star class=star_class() /> }}
                        </Button>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            class="text-destructive"
                            attr:title="Delete note"
                            on:click=move |_| prompt.update(|p| p.open())
                        >
                            <Trash2 class="size-4" />
                        </Button>
                    </Show>
                    <Button size=ButtonSize::Sm on:click=move |_| save()>
                        "Save"
                    </Button>
                </div>
            </div>

            <div class="space-y-2">
                <Label html_for="note-text">
                    {if is_new { "New note for " } else { "Note for " }}
                    {long_date(date)}
                </Label>
                <Textarea
                    id="note-text"
                    placeholder="Write something..."
                    rows=12
                    bind_value=text
                    node_ref=textarea_ref
                />
                <p class="text-xs text-muted-foreground">"Ctrl+Enter to save, Esc to discard."</p>
            </div>

            <Show when=move || prompt.get().is_open() fallback=|| ().into_view()>
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                    <Card class="w-full max-w-sm shadow-lg">
                        <CardHeader>
                            <CardTitle class="text-sm text-destructive">"Delete note"</CardTitle>
                            <CardDescription class="text-xs">
                                "This note will be removed. This cannot be undone."
                            </CardDescription>
                        </CardHeader>

                        <div class="flex items-center justify-end gap-2 px-4 pt-2">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                on:click=move |_| prompt.update(|p| p.decline())
                            >
                                "Cancel"
                            </Button>
                            <Button
                                variant=ButtonVariant::Destructive
                                size=ButtonSize::Sm
                                on:click=on_confirm_delete
                            >
                                "Delete"
                            </Button>
                        </div>
                    </Card>
                </div>
            </Show>
        </div>
    }
}
