//! Bulk Products App
//!
//! Toolbar, product grid and result panels.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{AlertBanner, CreatedPartsList, ProductRow, ResultPanel};
use crate::config::PageConfig;
use crate::context::FormContext;
use crate::form::submission::SubmitOutcome;

/// Post all rows and apply the reply to the form
pub fn submit_batch(ctx: FormContext) {
    let Some((ticket, request)) = ctx.store.try_update(|f| f.begin_submit()).flatten() else {
        warn!("[SUBMIT] Nothing to submit");
        return;
    };

    let api_url = ctx.api_url();
    let csrf = ctx.config.with_value(|c| commands::csrf_token(c.fallback_csrf()));
    log!("[SUBMIT] Posting {} items to {}", request.items.len(), api_url);

    spawn_local(async move {
        let outcome = match commands::bulk_create(&api_url, csrf.as_deref(), &request).await {
            Ok(outcome) => outcome,
            Err(err) => SubmitOutcome::Transport(err.to_string()),
        };
        if let SubmitOutcome::Reply { status, .. } = &outcome {
            log!("[SUBMIT] Reply status {}", status);
        }

        let applied = ctx.store.try_update(|f| f.finish_submit(ticket, &outcome)).unwrap_or(false);
        if !applied {
            log!("[SUBMIT] Dropped reply of superseded submit");
        }
    });
}

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let ctx = FormContext::new(config);
    provide_context(ctx);
    let store = ctx.store;

    let row_ids = move || store.with(|f| f.row_ids());

    view! {
        <div class="bp-app">
            <div class="bp-toolbar mb-2">
                <button
                    type="button"
                    id="bp-add-row"
                    class="btn btn-sm btn-outline-primary"
                    on:click=move |_| {
                        store.update(|f| {
                            f.add_row();
                        });
                    }
                >
                    "+ Zeile hinzufügen"
                </button>
                <button
                    type="button"
                    id="bp-reset"
                    class="btn btn-sm btn-outline-secondary"
                    on:click=move |_| store.update(|f| f.reset())
                >
                    "Zurücksetzen"
                </button>
                <button
                    type="button"
                    id="bp-submit"
                    class="btn btn-sm btn-primary"
                    on:click=move |_| submit_batch(ctx)
                >
                    "Produkte erstellen"
                </button>
            </div>

            <AlertBanner />

            <table class="table table-sm bp-table">
                <thead>
                    <tr>
                        <th class="text-center">"#"</th>
                        <th>"Kategorie"</th>
                        <th>"Name"</th>
                        <th>"Beschreibung"</th>
                        <th>"IPN"</th>
                        <th>"Menge"</th>
                        <th>"Lagerort"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="bp-rows">
                    <For
                        each=row_ids
                        key=|id| *id
                        children=move |row_id| view! { <ProductRow row_id=row_id /> }
                    />
                </tbody>
            </table>

            <ResultPanel />
            <CreatedPartsList />
        </div>
    }
}
