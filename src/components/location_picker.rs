//! Location Picker Component
//!
//! Text input with debounced search against the location endpoint and a
//! click-to-select dropdown. The paired hidden input carries the chosen id.

use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dropdown::on_click_outside;

use crate::commands;
use crate::context::use_form_context;
use crate::form::location::{DropdownEntry, InputAction, SearchTicket, NO_RESULTS_LABEL, SEARCH_DEBOUNCE_MS};
use crate::form::rows::RowId;

const PLACEHOLDER: &str = "Lagerort suchen...";

#[component]
pub fn LocationPicker(row_id: RowId) -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;
    let wrapper = NodeRef::<Div>::new();
    // Owned by this row; dropping the Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let placeholder = match ctx.config.with_value(|c| c.default_location()) {
        Some(id) => format!("{PLACEHOLDER} (Standard: #{id})"),
        None => PLACEHOLDER.to_string(),
    };

    let run_search = move |ticket: SearchTicket, query: String| {
        let url = ctx.search_locations_url();
        spawn_local(async move {
            match commands::search_locations(&url, &query).await {
                Ok(results) => store.update(|f| {
                    f.location_results(row_id, ticket, results);
                }),
                Err(err) => {
                    warn!("[SEARCH] Location search for {:?} failed: {}", query, err);
                    store.update(|f| f.location_failed(row_id, ticket));
                }
            }
        });
    };

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        match store.try_update(|f| f.location_input(row_id, text)).flatten() {
            Some(InputAction::Debounce(ticket)) => {
                let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                    let query = store
                        .try_update(|f| f.location_debounce_elapsed(row_id, ticket))
                        .flatten();
                    if let Some(query) = query {
                        run_search(ticket, query);
                    }
                });
                pending.set_value(Some(timer));
            }
            Some(InputAction::Hide) | None => pending.set_value(None),
        }
    };

    let on_focus = move |_: leptos::ev::FocusEvent| {
        if let Some((ticket, query)) = store.try_update(|f| f.location_focus(row_id)).flatten() {
            pending.set_value(None);
            run_search(ticket, query);
        }
    };

    on_click_outside(wrapper, move || {
        if store.with_untracked(|f| f.location_open(row_id)) {
            store.update(|f| f.location_dismiss(row_id));
        }
    });

    let text = move || store.with(|f| f.row(row_id).map(|r| r.location.text.clone())).unwrap_or_default();
    let selected_id = move || {
        store
            .with(|f| f.row(row_id).and_then(|r| r.location.selected_id))
            .map(|id| id.to_string())
            .unwrap_or_default()
    };
    let is_open = move || store.with(|f| f.location_open(row_id));
    let entries = move || {
        store
            .with(|f| f.row(row_id).map(|r| r.location.dropdown_entries()))
            .unwrap_or_default()
    };

    view! {
        <div class="bp-location-wrapper" node_ref=wrapper>
            <input
                type="text"
                class="bp-location-input bp-location-search"
                placeholder=placeholder
                autocomplete="off"
                prop:value=text
                on:input=on_input
                on:focus=on_focus
            />
            <input type="hidden" class="bp-location-id" prop:value=selected_id />
            <div class=move || if is_open() { "bp-location-dropdown show" } else { "bp-location-dropdown" }>
                {move || entries().into_iter().map(|entry| match entry {
                    DropdownEntry::Placeholder => view! {
                        <div class="bp-location-item bp-location-empty">{NO_RESULTS_LABEL}</div>
                    }.into_any(),
                    DropdownEntry::Choice { index, location } => view! {
                        <div
                            class="bp-location-item"
                            data-location-id=location.id.to_string()
                            on:click=move |_| {
                                store.update(|f| {
                                    f.location_select(row_id, index);
                                });
                            }
                        >
                            {location.text}
                        </div>
                    }.into_any(),
                }).collect_view()}
            </div>
        </div>
    }
}
