use crate::calendar::{month_grid, same_month, MonthCursor};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Separator};
use crate::components::{DragHooks, NoteCard};
use crate::drag::DragSession;
use crate::format::{day_number, long_date, month_year};
use crate::models::{Note, NoteId};
use crate::state::{AppContext, NavActions, NoteActions};
use crate::util::today_local;
use chrono::NaiveDate;
use icons::{ChevronLeft, ChevronRight, Maximize2, Minimize2, Plus};
use leptos::prelude::*;

#[component]
pub(crate) fn CalendarPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let note_actions = expect_context::<NoteActions>();
    let nav_actions = expect_context::<NavActions>();
    let week_start = app_state.0.config.with_value(|c| c.week_start);

    let selected = Memo::new(move |_| app_state.0.selected_date());

    // View-local: the displayed month is independent of the selected day.
    let cursor: RwSignal<MonthCursor> = RwSignal::new(MonthCursor::new(selected.get_untracked()));
    let current_month = Memo::new(move |_| cursor.get().month());
    let full_screen: RwSignal<bool> = RwSignal::new(false);
    let drag: RwSignal<Option<DragSession>> = RwSignal::new(None);

    let grid = Memo::new(move |_| month_grid(current_month.get(), week_start));
    let day_notes = Memo::new(move |_| {
        let date = selected.get();
        app_state.0.notes.with(|s| s.notes_on(date))
    });

    // Live order while a drag is in flight; the store is untouched until drop.
    let shown_notes = move || {
        let xs = day_notes.get();
        match drag.get() {
            Some(session) => session.preview(&xs),
            None => xs,
        }
    };

    let on_select_day = move |date: NaiveDate| {
        nav_actions.select_date.run(date);
        cursor.update(|c| {
            c.follow(date);
        });
    };

    let on_today = move |_| {
        if let Some(date) = cursor.try_update(|c| c.today(today_local())) {
            nav_actions.select_date.run(date);
        }
    };

    let position_in = |xs: &[Note], id: &str| xs.iter().position(|n| n.id == id);

    let hooks = DragHooks {
        start: Callback::new(move |id: NoteId| {
            let Some(from) = day_notes.with_untracked(|xs| position_in(xs, &id)) else {
                return;
            };
            drag.set(Some(DragSession::start(from)));
        }),
        over: Callback::new(move |id: NoteId| {
            let Some(mut session) = drag.get_untracked() else {
                return;
            };
            let preview = day_notes.with_untracked(|xs| session.preview(xs));
            let Some(idx) = position_in(&preview, &id) else {
                return;
            };
            if session.hover(idx) {
                drag.set(Some(session));
            }
        }),
        drop: Callback::new(move |_| {
            let Some(session) = drag.get_untracked() else {
                return;
            };
            drag.set(None);
            if let Some((from, to)) = session.commit() {
                note_actions
                    .reorder
                    .run((selected.get_untracked(), from, to));
            }
        }),
        // Abandoned drags just drop the preview.
        end: Callback::new(move |_| drag.set(None)),
    };

    let is_dragged = move |id: &str| {
        drag.get()
            .and_then(|s| day_notes.with(|xs| xs.get(s.from).map(|n| n.id == id)))
            .unwrap_or(false)
    };

    let day_cell_class = move |date: NaiveDate| {
        let is_selected = selected.get() == date;
        let in_month = same_month(date, current_month.get());
        let is_today = date == today_local();

        let mut class = String::from(
            "relative flex h-10 flex-col items-center justify-center rounded-md text-sm transition-colors",
        );
        if is_selected {
            class.push_str(" bg-primary text-primary-foreground");
        } else if is_today {
            class.push_str(" ring-1 ring-primary/40 hover:bg-accent");
        } else {
            class.push_str(" hover:bg-accent");
        }
        if !in_month && !is_selected {
            class.push_str(" text-muted-foreground/50");
        }
        class
    };

    let grid_class = move || {
        if full_screen.get() {
            "hidden"
        } else {
            "space-y-2"
        }
    };

    view! {
        <div class="flex h-full flex-col gap-4">
            <section class=grid_class>
                <div class="flex items-center justify-between">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Previous month"
                        on:click=move |_| cursor.update(|c| c.step(-1))
                    >
                        <ChevronLeft class="size-4" />
                    </Button>

                    <div class="flex items-center gap-2">
                        <h1 class="text-base font-semibold">{move || month_year(current_month.get())}</h1>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=on_today>
                            "Today"
                        </Button>
                    </div>

                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Next month"
                        on:click=move |_| cursor.update(|c| c.step(1))
                    >
                        <ChevronRight class="size-4" />
                    </Button>
                </div>

                <div class="grid grid-cols-7 gap-1 text-center text-xs text-muted-foreground">
                    {week_start
                        .labels()
                        .into_iter()
                        .map(|l| view! { <div class="py-1">{l}</div> })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-7 gap-1">
                    {move || {
                        grid.get()
                            .into_iter()
                            .map(|date| {
                                let has_notes = move || app_state.0.notes.with(|s| s.has_notes_on(date));
                                view! {
                                    <button
                                        type="button"
                                        class=move || day_cell_class(date)
                                        on:click=move |_| on_select_day(date)
                                    >
                                        <span>{day_number(date)}</span>
                                        <Show when=has_notes fallback=|| ().into_view()>
                                            <span class="absolute bottom-1 size-1 rounded-full bg-current opacity-70" />
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <Separator class="mt-2" />
            </section>

            <section class="flex min-h-0 flex-1 flex-col gap-2">
                <div class="flex items-center justify-between gap-2">
                    <div class="min-w-0 space-y-0.5">
                        <h2 class="truncate text-sm font-semibold">{move || long_date(selected.get())}</h2>
                        <p class="text-xs text-muted-foreground">
                            {move || match day_notes.with(|xs| xs.len()) {
                                0 => "No notes".to_string(),
                                1 => "1 note".to_string(),
                                n => format!("{n} notes"),
                            }}
                        </p>
                    </div>

                    <div class="flex items-center gap-1">
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            attr:title=move || if full_screen.get() { "Show calendar" } else { "Expand list" }
                            on:click=move |_| full_screen.update(|v| *v = !*v)
                        >
                            {move || if full_screen.get() {
                                view! { <Minimize2 class="size-4" /> }.into_any()
                            } else {
                                view! { <Maximize2 class="size-4" /> }.into_any()
                            }}
                        </Button>
                        <Button size=ButtonSize::Sm on:click=move |_| nav_actions.open_create.run(())>
                            <Plus class="size-4" />
                            "New note"
                        </Button>
                    </div>
                </div>

                <Show
                    when=move || day_notes.with(|xs| !xs.is_empty())
                    fallback=|| view! {
                        <div class="rounded-md border border-dashed border-border p-6 text-center text-sm text-muted-foreground">
                            "Nothing written for this day yet."
                        </div>
                    }
                >
                    <ul class="flex flex-col gap-2 overflow-y-auto pb-4">
                        <For
                            each=shown_notes
                            key=|n: &Note| (n.id.clone(), n.text.clone(), n.is_favorite)
                            children=move |note: Note| {
                                let id = note.id.clone();
                                view! {
                                    <NoteCard
                                        note=note
                                        on_select=Callback::new(move |n: Note| nav_actions.open_edit.run(n.id))
                                        drag=hooks
                                        on_toggle_favorite=note_actions.toggle_favorite
                                        is_dragging=Signal::derive(move || is_dragged(&id))
                                    />
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}
