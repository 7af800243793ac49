use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::components::NoteCard;
use crate::format::{day_anchor_id, long_date};
use crate::models::Note;
use crate::query::feed_groups;
use crate::state::{AppContext, NavActions};
use crate::util::today_local;
use chrono::NaiveDate;
use icons::X;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn scroll_to_day(date: NaiveDate, behavior: ScrollBehavior) {
    let Some(doc) = window().document() else {
        return;
    };
    let Some(el) = doc.get_element_by_id(&day_anchor_id(date)) else {
        log::debug!("feed anchor for {date} not rendered yet");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(behavior);
    opts.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Every note grouped by day, oldest first, with today's group always present.
#[component]
pub(crate) fn FeedPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let nav_actions = expect_context::<NavActions>();
    let today = today_local();

    let groups = Memo::new(move |_| app_state.0.notes.with(|s| feed_groups(s.notes(), today)));

    // Defer: groups might still be rendering.
    Effect::new(move |_| {
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(move || {
                scroll_to_day(today, ScrollBehavior::Instant);
            })
            .as_ref()
            .unchecked_ref(),
            0,
        );
    });

    let on_select = Callback::new(move |n: Note| nav_actions.select_note.run(n));

    view! {
        <div class="relative flex h-full flex-col gap-4">
            <div class="flex items-center justify-between">
                <h1 class="text-base font-semibold">"Feed"</h1>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:title="Back to calendar"
                    on:click=move |_| nav_actions.back_to_calendar.run(())
                >
                    <X class="size-4" />
                </Button>
            </div>

            <div class="flex flex-col gap-6 pb-24">
                {move || {
                    groups
                        .get()
                        .into_iter()
                        .map(|group| {
                            let is_today = group.is_today(today);
                            let heading_class = if is_today {
                                "text-sm font-semibold text-primary"
                            } else {
                                "text-sm font-semibold"
                            };
                            let empty_today = is_today && group.notes.is_empty();
                            view! {
                                <section id=day_anchor_id(group.date) class="space-y-2">
                                    <h2 class=heading_class>
                                        {long_date(group.date)}
                                        {is_today.then(|| view! { <span class="ml-2 text-xs font-normal text-muted-foreground">"Today"</span> })}
                                    </h2>
                                    {empty_today.then(|| view! {
                                        <div class="rounded-md border border-dashed border-border p-4 text-sm text-muted-foreground">
                                            "No notes yet today."
                                        </div>
                                    })}
                                    <ul class="flex flex-col gap-2">
                                        {group
                                            .notes
                                            .into_iter()
                                            .map(|note| view! { <NoteCard note=note on_select=on_select /> })
                                            .collect_view()}
                                    </ul>
                                </section>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="pointer-events-none sticky bottom-4 flex justify-end">
                <Button
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Fab
                    class="pointer-events-auto"
                    on:click=move |_| scroll_to_day(today, ScrollBehavior::Smooth)
                >
                    "Today"
                </Button>
            </div>
        </div>
    }
}
