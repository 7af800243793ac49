use crate::components::ui::{Button, ButtonSize, ButtonVariant, CardList, Input};
use crate::components::NoteCard;
use crate::format::short_date;
use crate::models::Note;
use crate::query::search_notes;
use crate::state::{AppContext, NavActions};
use icons::X;
use leptos::html;
use leptos::prelude::*;

#[component]
pub(crate) fn SearchPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let nav_actions = expect_context::<NavActions>();
    let query = app_state.0.search_query;
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let results = Memo::new(move |_| {
        let q = query.get();
        app_state.0.notes.with(|s| search_notes(s.notes(), &q))
    });
    let has_query = move || !query.with(|q| q.trim().is_empty());

    Effect::new(move |_| {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div class="flex h-full flex-col gap-4">
            <div class="flex items-center gap-2">
                <Input
                    r#type="search"
                    placeholder="Search notes"
                    bind_value=query
                    on_escape=Callback::new(move |_| query.set(String::new()))
                    node_ref=input_ref
                />
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:title="Close search"
                    on:click=move |_| nav_actions.back_to_calendar.run(())
                >
                    <X class="size-4" />
                </Button>
            </div>

            <Show
                when=has_query
                fallback=|| view! {
                    <div class="rounded-md border border-border bg-muted p-4 text-sm text-muted-foreground">
                        "Type to search every note, newest first."
                    </div>
                }
            >
                <p class="text-xs text-muted-foreground">
                    {move || match results.with(|r| r.len()) {
                        0 => "No matching notes.".to_string(),
                        1 => "1 result".to_string(),
                        n => format!("{n} results"),
                    }}
                </p>
                <CardList class="overflow-y-auto pb-4">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|note| {
                                let meta = short_date(note.date);
                                view! {
                                    <NoteCard
                                        note=note
                                        meta=meta
                                        on_select=Callback::new(move |n: Note| nav_actions.select_note.run(n))
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </CardList>
            </Show>
        </div>
    }
}
