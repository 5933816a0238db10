//! Created Parts List Component
//!
//! Links to the parts created by the last submit.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::form::BulkFormStoreFields;
use crate::models::CreatedPart;

/// Auxiliary text next to the link, e.g. `ID: 12 | IPN: W-1`
pub fn part_info(part: &CreatedPart) -> String {
    let mut info = format!("ID: {}", part.id);
    if let Some(ipn) = part.ipn.as_deref().filter(|ipn| !ipn.is_empty()) {
        info.push_str(&format!(" | IPN: {ipn}"));
    }
    if let Some(quantity) = part.stocked {
        info.push_str(&format!(" | Menge: {quantity}"));
    }
    info
}

#[component]
pub fn CreatedPartsList() -> impl IntoView {
    let parts = use_form_context().store.created_parts();

    view! {
        <div
            id="bp-created-parts"
            class=move || if parts.with(|p| p.is_empty()) { "bp-created-parts d-none" } else { "bp-created-parts" }
        >
            <h6 class="mt-3">"Erstellte Produkte"</h6>
            <div id="bp-parts-list" class="list-group">
                {move || parts.get().into_iter().map(|part| {
                    let info = part_info(&part);
                    let href = part.url.clone().unwrap_or_else(|| "#".to_string());
                    view! {
                        <div
                            class="list-group-item"
                            style="display: flex; justify-content: space-between; align-items: center;"
                        >
                            <a href=href target="_blank">{part.name}</a>
                            <span class="text-muted small">{info}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
