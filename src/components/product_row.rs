//! Product Row Component
//!
//! One editable table row of the bulk form.

use leptos::prelude::*;

use crate::components::{CategorySelect, LocationPicker};
use crate::context::use_form_context;
use crate::form::rows::{RowDraft, RowField, RowId};

#[component]
pub fn ProductRow(row_id: RowId) -> impl IntoView {
    let store = use_form_context().store;

    let position = move || store.with(|f| f.position(row_id)).map(|p| p + 1);
    let field = move |read: fn(&RowDraft) -> String| {
        move || store.with(|f| f.row(row_id).map(read)).unwrap_or_default()
    };
    let edit = move |field: RowField| store.update(|f| f.update_row(row_id, field));

    view! {
        <tr class="bp-row">
            <td class="text-center bp-position">{position}</td>
            <td>
                <CategorySelect row_id=row_id />
            </td>
            <td>
                <input
                    class="form-control form-control-sm bp-name"
                    type="text"
                    placeholder="Produktname"
                    prop:value=field(|r| r.name.clone())
                    on:input=move |ev| edit(RowField::Name(event_target_value(&ev)))
                />
            </td>
            <td>
                <input
                    class="form-control form-control-sm bp-description"
                    type="text"
                    placeholder="Beschreibung"
                    prop:value=field(|r| r.description.clone())
                    on:input=move |ev| edit(RowField::Description(event_target_value(&ev)))
                />
            </td>
            <td>
                <input
                    class="form-control form-control-sm bp-ipn"
                    type="text"
                    placeholder="IPN"
                    prop:value=field(|r| r.ipn.clone())
                    on:input=move |ev| edit(RowField::Ipn(event_target_value(&ev)))
                />
            </td>
            <td>
                <input
                    class="form-control form-control-sm bp-quantity"
                    type="number"
                    min="0"
                    step="1"
                    prop:value=field(|r| r.quantity.clone())
                    on:input=move |ev| edit(RowField::Quantity(event_target_value(&ev)))
                />
            </td>
            <td>
                <LocationPicker row_id=row_id />
            </td>
            <td class="text-end">
                <button
                    type="button"
                    class="btn btn-sm btn-outline-danger bp-remove"
                    title="Zeile entfernen"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        store.update(|f| {
                            f.remove_row(row_id);
                        });
                    }
                >
                    "✕"
                </button>
            </td>
        </tr>
    }
}
