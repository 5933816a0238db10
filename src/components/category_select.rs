//! Category Select Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_form_context;
use crate::form::rows::{RowField, RowId};

const PLACEHOLDER: &str = "Kategorie wählen";

#[component]
pub fn CategorySelect(row_id: RowId) -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;
    let categories = ctx.config.with_value(|c| c.categories.clone());

    let selected = move || {
        store
            .with(|f| f.row(row_id).and_then(|r| r.category_id))
            .map(|id| id.to_string())
            .unwrap_or_default()
    };

    view! {
        <select
            class="form-select form-select-sm bp-category"
            prop:value=selected
            on:change=move |ev| {
                let value = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                    .map(|select| select.value())
                    .unwrap_or_default();
                store.update(|f| f.update_row(row_id, RowField::Category(value)));
            }
        >
            <option value="">{PLACEHOLDER}</option>
            {categories.into_iter().map(|category| {
                let id = category.id;
                view! {
                    <option
                        value=id.to_string()
                        selected=move || store.with(|f| f.row(row_id).and_then(|r| r.category_id)) == Some(id)
                    >
                        {category.label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
