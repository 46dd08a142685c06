//! Contact directory page: search bar, results table and detail dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only data-fetching component. Filter edits land in the draft
//! immediately and are committed after the configured debounce delay; page
//! and page-size changes commit at once. Each commit issues one request, and
//! only the newest request's outcome is rendered.
//!
//! TIMERS
//! ======
//! Only the newest debounce timer is kept. Arming a new one drops the
//! previous `Timeout`, which clears it in the browser. Page teardown drops the
//! armed timer and cancels the debounce, so a timer that already fired past
//! teardown still finds its ticket stale.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use people::debounce::{Debounce, Ticket};
use people::load::LoadState;
use people::person::Person;
use people::query::PersonFilter;

use crate::components::person_detail_dialog::PersonDetailDialog;
use crate::components::persons_table::PersonsTable;
use crate::components::search_filter::SearchFilter;
use crate::config::ApiConfig;
use crate::state::directory::{DirectoryState, Loaded};

#[cfg(feature = "csr")]
use crate::state::directory::LoadRequest;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

/// Owns the armed debounce timer, if any.
#[derive(Clone, Copy)]
struct TimerSlot {
    #[cfg(feature = "csr")]
    armed: StoredValue<Option<Timeout>, LocalStorage>,
}

impl TimerSlot {
    fn new() -> Self {
        Self {
            #[cfg(feature = "csr")]
            armed: StoredValue::new_local(None),
        }
    }

    /// Replace the armed timer; the previous one is dropped and never fires.
    #[cfg(feature = "csr")]
    fn arm(self, delay_ms: u32, fire: impl FnOnce() + 'static) {
        let _ = self.armed.try_update_value(|slot| slot.replace(Timeout::new(delay_ms, fire)));
    }

    fn clear(self) {
        #[cfg(feature = "csr")]
        {
            let _ = self.armed.try_update_value(Option::take);
        }
    }
}

/// Which of the three result views to show.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Results {
    Loading,
    Failed(String),
    Ready,
}

impl Results {
    fn of(load: &LoadState<Loaded>) -> Self {
        match load {
            LoadState::Loading => Self::Loading,
            LoadState::Failed(message) => Self::Failed(message.clone()),
            LoadState::Ready(_) => Self::Ready,
        }
    }
}

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let state = expect_context::<RwSignal<DirectoryState>>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let debounce = StoredValue::new(Debounce::<PersonFilter>::new(config.with_value(|c| c.debounce_ms)));

    let timer = TimerSlot::new();

    Effect::new(move || load(state, config.get_value()));
    on_cleanup(move || {
        timer.clear();
        let _ = debounce.try_update_value(Debounce::cancel);
    });

    let draft = Signal::derive(move || state.with(|s| s.draft.clone()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let rows = Signal::derive(move || state.with(DirectoryState::rows));
    let total = Signal::derive(move || state.with(DirectoryState::total));
    let selected = Signal::derive(move || state.with(|s| s.selected.clone()));
    let results = Memo::new(move |_| state.with(|s| Results::of(&s.load)));

    let on_filter_change = Callback::new(move |filter: PersonFilter| {
        state.update(|s| s.draft = filter.clone());
        if let Some(ticket) = debounce.try_update_value(|d| d.push(filter)) {
            schedule_commit(state, debounce, config, timer, ticket);
        }
    });
    let on_page_change = Callback::new(move |page: usize| {
        if state.try_update(|s| s.set_page(page)).unwrap_or(false) {
            load(state, config.get_value());
        }
    });
    let on_rows_per_page_change = Callback::new(move |rows_per_page: usize| {
        if state.try_update(|s| s.set_rows_per_page(rows_per_page)).unwrap_or(false) {
            load(state, config.get_value());
        }
    });
    let on_row_click = Callback::new(move |person: Person| state.update(|s| s.select(person)));
    let on_close = Callback::new(move |_| state.update(DirectoryState::close_detail));

    view! {
        <div class="directory-page">
            <header class="directory-page__header">
                <h1>"Contact Hub"</h1>
            </header>
            <SearchFilter draft=draft on_change=on_filter_change/>
            <section class="directory-page__results">
                {move || match results.get() {
                    Results::Loading => {
                        view! { <p class="directory-page__status" aria-busy="true">"Loading contacts..."</p> }
                            .into_any()
                    }
                    Results::Failed(message) => {
                        view! { <p class="directory-page__error" role="alert">{message}</p> }.into_any()
                    }
                    Results::Ready => {
                        view! {
                            <PersonsTable
                                rows=rows
                                pagination=pagination
                                total=total
                                on_row_click=on_row_click
                                on_page_change=on_page_change
                                on_rows_per_page_change=on_rows_per_page_change
                            />
                        }
                            .into_any()
                    }
                }}
            </section>
            <PersonDetailDialog person=selected on_close=on_close/>
        </div>
    }
}

/// Arm the debounce timer for `ticket`.
fn schedule_commit(
    state: RwSignal<DirectoryState>,
    debounce: StoredValue<Debounce<PersonFilter>>,
    config: StoredValue<ApiConfig>,
    timer: TimerSlot,
    ticket: Ticket,
) {
    #[cfg(feature = "csr")]
    {
        let delay_ms = debounce.with_value(Debounce::delay_ms);
        timer.arm(delay_ms, move || commit_pending(state, debounce, config, ticket));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (state, debounce, config, timer, ticket);
    }
}

/// Timer body: commit the pending filter if `ticket` is still the newest.
#[cfg(feature = "csr")]
fn commit_pending(
    state: RwSignal<DirectoryState>,
    debounce: StoredValue<Debounce<PersonFilter>>,
    config: StoredValue<ApiConfig>,
    ticket: Ticket,
) {
    let Some(filter) = debounce.try_update_value(|d| d.take(ticket)).flatten() else {
        return;
    };
    if state.try_update(|s| s.commit_filter(filter)).unwrap_or(false) {
        if let Some(config) = config.try_get_value() {
            load(state, config);
        }
    }
}

/// Issue the request for the current state and apply its outcome.
fn load(state: RwSignal<DirectoryState>, config: ApiConfig) {
    let Some((token, request)) = state.try_update(DirectoryState::begin_load) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match request {
            LoadRequest::Page(query) => match crate::net::api::fetch_page(&config, &query).await {
                Ok(page) => {
                    log::debug!("loaded {} of {} contacts", page.data.len(), page.total);
                    if state.try_update(|s| s.finish_page(token, page)).unwrap_or(false) {
                        load(state, config);
                    }
                }
                Err(e) => {
                    log::warn!("contact request failed: {e}");
                    let _ = state.try_update(|s| s.fail_load(token, &e));
                }
            },
            LoadRequest::Listing => match crate::net::api::fetch_all(&config).await {
                Ok(persons) => {
                    log::debug!("loaded {} contacts for local paging", persons.len());
                    let _ = state.try_update(|s| s.finish_listing(token, persons));
                }
                Err(e) => {
                    log::warn!("contact listing request failed: {e}");
                    let _ = state.try_update(|s| s.fail_load(token, &e));
                }
            },
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, request, config);
    }
}
