//! Result Panel Component
//!
//! Summary of the last submit with itemized failures.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::form::submission::{BatchSummary, ResultArea, FAILED_RESULT, IDLE_RESULT, PENDING_MESSAGE};
use crate::form::BulkFormStoreFields;

fn summary_view(summary: BatchSummary) -> AnyView {
    let failures = (!summary.failures.is_empty()).then(|| {
        view! {
            <ul class="mb-0">
                {summary.failures.iter().map(|line| view! {
                    <li class="text-danger">{line.message()}</li>
                }).collect_view()}
            </ul>
        }
    });

    view! {
        <div class="mb-2">
            <strong>"Erstellt:"</strong>
            " " {summary.created} "\u{a0}\u{a0} "
            <strong>"Fehler:"</strong>
            " " {summary.failed}
        </div>
        {failures}
    }
    .into_any()
}

#[component]
pub fn ResultPanel() -> impl IntoView {
    let result = use_form_context().store.result();

    view! {
        <div id="bp-result" class="bp-result">
            {move || match result.get() {
                ResultArea::Empty => IDLE_RESULT.into_any(),
                ResultArea::Pending => PENDING_MESSAGE.into_any(),
                ResultArea::Failed => FAILED_RESULT.into_any(),
                ResultArea::Succeeded(summary) | ResultArea::PartiallyFailed(summary) => summary_view(summary),
            }}
        </div>
    }
}
