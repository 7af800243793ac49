use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::config::AppConfig;
use crate::pages::{CalendarPage, CountdownsPage, EditorPage, FeedPage, SearchPage};
use crate::seed::demo_store;
use crate::state::{AppContext, AppState, NavActions, Navigation, NoteActions, View};
use crate::store::NoteStore;
use crate::util::today_local;
use leptos::prelude::*;

fn initial_store(config: &AppConfig) -> NoteStore {
    if !config.seed_demo_notes {
        return NoteStore::new();
    }
    match demo_store(today_local()) {
        Ok(store) => store,
        Err(e) => {
            log::error!("failed to load demo notes: {e}");
            NoteStore::new()
        }
    }
}

#[component]
pub(crate) fn App(config: AppConfig) -> impl IntoView {
    let store = initial_store(&config);
    log::info!("daybook started with {} notes", store.len());

    // The only write halves live in the action bundles below.
    let (notes, set_notes) = signal(store);
    let (nav, set_nav) = signal(Navigation::new(today_local()));

    let app_state = AppState {
        notes,
        nav,
        search_query: RwSignal::new(String::new()),
        config: StoredValue::new(config),
    };
    provide_context(AppContext(app_state));
    provide_context(NoteActions::new(set_notes));

    let nav_actions = NavActions::new(set_nav);
    provide_context(nav_actions);

    // Memo so that selecting a day does not remount the active view.
    let active_view = Memo::new(move |_| nav.with(|n| n.view));

    let tab_class = "flex-1";

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <div class="mx-auto flex min-h-screen w-full max-w-xl flex-col gap-4 px-4 py-6">
                <header class="flex items-center justify-between">
                    <span class="text-sm font-semibold">"Daybook"</span>
                    <span class="text-xs text-muted-foreground">
                        {move || notes.with(|s| match s.len() {
                            _ if s.is_empty() => "No notes".to_string(),
                            1 => "1 note".to_string(),
                            n => format!("{n} notes"),
                        })}
                    </span>
                </header>

                <Show when=move || active_view.get().is_tab() fallback=|| ().into_view()>
                    <nav class="flex gap-1 rounded-md border border-border p-1">
                        {View::TABS
                            .into_iter()
                            .map(|tab| {
                                move || {
                                    let variant = if active_view.get() == tab {
                                        ButtonVariant::Accent
                                    } else {
                                        ButtonVariant::Ghost
                                    };
                                    view! {
                                        <Button
                                            variant=variant
                                            size=ButtonSize::Sm
                                            class=tab_class
                                            on:click=move |_| nav_actions.switch_tab.run(tab)
                                        >
                                            {tab.to_string()}
                                        </Button>
                                    }
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>

                <main class="flex-1">
                    {move || match active_view.get() {
                        View::Calendar => view! { <CalendarPage /> }.into_any(),
                        View::Editor => view! { <EditorPage /> }.into_any(),
                        View::Search => view! { <SearchPage /> }.into_any(),
                        View::Feed => view! { <FeedPage /> }.into_any(),
                        View::Countdowns => view! { <CountdownsPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
