use crate::components::ui::{Alert, AlertDescription, AlertTitle, CardList};
use crate::format::{note_display_text, short_date, Countdown};
use crate::query::countdowns;
use crate::state::{AppContext, NavActions};
use crate::util::today_local;
use leptos::prelude::*;

#[component]
pub(crate) fn CountdownsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let nav_actions = expect_context::<NavActions>();
    let today = today_local();

    let entries = Memo::new(move |_| app_state.0.notes.with(|s| countdowns(s.notes(), today)));

    view! {
        <div class="flex h-full flex-col gap-4">
            <div class="space-y-1">
                <h1 class="text-base font-semibold">"Countdowns"</h1>
                <p class="text-xs text-muted-foreground">"Favorited notes and how far away they are."</p>
            </div>

            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| view! {
                    <Alert>
                        <AlertTitle>"No favorites yet"</AlertTitle>
                        <AlertDescription>
                            "Star a note from the calendar or the editor to track it here."
                        </AlertDescription>
                    </Alert>
                }
            >
                <CardList class="overflow-y-auto pb-4">
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let countdown = entry.countdown;
                                let note = entry.note;
                                let text = note_display_text(&note.text).to_string();
                                let date = short_date(note.date);
                                view! {
                                    <li
                                        class="flex cursor-pointer items-center gap-4 rounded-md border border-border bg-background px-3 py-2 transition-colors hover:bg-accent/50"
                                        on:click=move |_| nav_actions.select_note.run(note.clone())
                                    >
                                        <div class="flex w-20 shrink-0 flex-col items-center">
                                            {match countdown {
                                                Countdown::Today => view! {
                                                    <span class="text-sm font-semibold text-primary">"Today"</span>
                                                }
                                                .into_any(),
                                                other => view! {
                                                    <span class="text-2xl font-semibold leading-none">
                                                        {other.count().unwrap_or_default()}
                                                    </span>
                                                    <span class="text-[10px] uppercase tracking-wide text-muted-foreground">
                                                        {other.label()}
                                                    </span>
                                                }
                                                .into_any(),
                                            }}
                                        </div>
                                        <div class="min-w-0 flex-1">
                                            <div class="truncate text-sm">{text}</div>
                                            <div class="text-xs text-muted-foreground">{date}</div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </CardList>
            </Show>
        </div>
    }
}
