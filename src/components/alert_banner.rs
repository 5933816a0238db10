//! Alert Banner Component

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::form::BulkFormStoreFields;

/// Status line above the grid; hidden while there is nothing to say
#[component]
pub fn AlertBanner() -> impl IntoView {
    let alert = use_form_context().store.alert();

    view! {
        <div
            id="bp-alert"
            role="alert"
            class=move || match alert.get() {
                Some(a) => format!("alert {}", a.kind.css_class()),
                None => "alert d-none".to_string(),
            }
        >
            {move || alert.get().map(|a| a.message).unwrap_or_default()}
        </div>
    }
}
