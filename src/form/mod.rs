//! Bulk Form State
//!
//! The whole grid as one view-model: rows, the alert, the result area and
//! the created-parts list. Components only call methods on this type and
//! render what it holds.

pub mod location;
pub mod rows;
pub mod submission;

use reactive_stores::Store;

use crate::models::{BulkCreateRequest, CreatedPart, Location, ProductItem};
use location::{InputAction, SearchTicket};
use rows::{RowDraft, RowField, RowId};
use submission::{Alert, ResultArea, SubmitOutcome, NO_ROWS_MESSAGE, PENDING_MESSAGE};

/// Identifies one submit; replies for older tickets are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u32);

#[derive(Clone, Debug, Default, Store)]
pub struct BulkForm {
    /// Rows in display order
    pub rows: Vec<RowDraft>,
    pub alert: Option<Alert>,
    pub result: ResultArea,
    pub created_parts: Vec<CreatedPart>,
    next_row_id: u32,
    submit_seq: u32,
}

impl BulkForm {
    /// Fresh grid with one empty row
    pub fn new() -> Self {
        let mut form = Self::default();
        form.reset();
        form
    }

    // ========================
    // Row manager
    // ========================

    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id = self.next_row_id.wrapping_add(1);
        self.rows.push(RowDraft::new(id));
        id
    }

    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// Clear rows, alert and results, then start over with one empty row.
    /// Replies to submits issued before the reset are ignored.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.alert = None;
        self.result = ResultArea::Empty;
        self.created_parts.clear();
        self.submit_seq = self.submit_seq.wrapping_add(1);
        self.add_row();
    }

    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn row(&self, id: RowId) -> Option<&RowDraft> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut RowDraft> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// 0-based display position
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn update_row(&mut self, id: RowId, field: RowField) {
        if let Some(row) = self.row_mut(id) {
            row.apply(field);
        }
    }

    pub fn collect_items(&self) -> Vec<ProductItem> {
        self.rows.iter().map(RowDraft::to_item).collect()
    }

    // ========================
    // Location autocomplete
    // ========================

    pub fn location_input(&mut self, id: RowId, text: String) -> Option<InputAction> {
        self.row_mut(id).map(|row| row.location.input(text))
    }

    pub fn location_debounce_elapsed(&mut self, id: RowId, ticket: SearchTicket) -> Option<String> {
        self.row_mut(id)?.location.debounce_elapsed(ticket)
    }

    pub fn location_focus(&mut self, id: RowId) -> Option<(SearchTicket, String)> {
        self.row_mut(id)?.location.focus()
    }

    pub fn location_results(&mut self, id: RowId, ticket: SearchTicket, results: Vec<Location>) -> bool {
        self.row_mut(id)
            .map(|row| row.location.results(ticket, results))
            .unwrap_or(false)
    }

    pub fn location_failed(&mut self, id: RowId, ticket: SearchTicket) {
        if let Some(row) = self.row_mut(id) {
            row.location.search_failed(ticket);
        }
    }

    pub fn location_select(&mut self, id: RowId, index: usize) -> Option<Location> {
        self.row_mut(id)?.location.select(index)
    }

    pub fn location_dismiss(&mut self, id: RowId) {
        if let Some(row) = self.row_mut(id) {
            row.location.dismiss();
        }
    }

    pub fn location_open(&self, id: RowId) -> bool {
        self.row(id).is_some_and(|row| row.location.is_open())
    }

    // ========================
    // Submission
    // ========================

    /// Validate and move to Pending. Returns the payload to post, or `None`
    /// when there is nothing to submit (the alert says why).
    pub fn begin_submit(&mut self) -> Option<(SubmitTicket, BulkCreateRequest)> {
        self.alert = None;

        let items = self.collect_items();
        if items.is_empty() {
            self.alert = Some(Alert::danger(NO_ROWS_MESSAGE));
            return None;
        }

        self.submit_seq = self.submit_seq.wrapping_add(1);
        self.alert = Some(Alert::info(PENDING_MESSAGE));
        self.result = ResultArea::Pending;
        self.created_parts.clear();

        Some((SubmitTicket(self.submit_seq), BulkCreateRequest { items }))
    }

    /// Apply the reply of the latest submit. Returns false for stale replies.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, outcome: &SubmitOutcome) -> bool {
        if ticket != SubmitTicket(self.submit_seq) {
            return false;
        }
        let report = submission::interpret(outcome);
        self.alert = Some(report.alert);
        self.result = report.result;
        self.created_parts = report.created_parts;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::location::{DropdownEntry, SearchPhase};
    use crate::form::submission::{AlertKind, IDLE_RESULT};
    use serde_json::json;

    fn empty_grid() -> BulkForm {
        let mut form = BulkForm::new();
        let first = form.row_ids()[0];
        form.remove_row(first);
        form
    }

    fn ok_reply(body: serde_json::Value) -> SubmitOutcome {
        SubmitOutcome::Reply { status: 200, body: body.to_string() }
    }

    #[test]
    fn test_new_has_one_empty_row() {
        let form = BulkForm::new();
        assert_eq!(form.rows.len(), 1);
        assert_eq!(form.result, ResultArea::Empty);
        assert!(form.alert.is_none());
    }

    #[test]
    fn test_add_then_remove_keeps_order() {
        for n in 0..6usize {
            for m in 0..=n {
                let mut form = empty_grid();
                let ids: Vec<RowId> = (0..n).map(|_| form.add_row()).collect();
                for (i, id) in ids.iter().enumerate() {
                    form.update_row(*id, RowField::Name(format!("row-{i}")));
                }
                // Remove every other row first, then from the front
                let mut removal: Vec<RowId> = ids.iter().copied().step_by(2).collect();
                removal.extend(ids.iter().copied().skip(1).step_by(2));
                for id in removal.iter().take(m) {
                    assert!(form.remove_row(*id));
                }

                let items = form.collect_items();
                assert_eq!(items.len(), n - m);

                let expected: Vec<String> = ids
                    .iter()
                    .enumerate()
                    .filter(|(_, id)| !removal[..m].contains(id))
                    .map(|(i, _)| format!("row-{i}"))
                    .collect();
                let names: Vec<String> = items.into_iter().map(|item| item.name).collect();
                assert_eq!(names, expected);
            }
        }
    }

    #[test]
    fn test_remove_unknown_row() {
        let mut form = BulkForm::new();
        let id = form.row_ids()[0];
        assert!(form.remove_row(id));
        assert!(!form.remove_row(id));
    }

    #[test]
    fn test_row_ids_are_not_reused() {
        let mut form = BulkForm::new();
        let first = form.row_ids()[0];
        form.remove_row(first);
        let second = form.add_row();
        assert_ne!(first, second);
    }

    #[test]
    fn test_position_follows_removal() {
        let mut form = BulkForm::new();
        let first = form.row_ids()[0];
        let second = form.add_row();
        assert_eq!(form.position(second), Some(1));
        form.remove_row(first);
        assert_eq!(form.position(second), Some(0));
        assert_eq!(form.position(first), None);
    }

    #[test]
    fn test_submit_without_rows_is_blocked() {
        let mut form = empty_grid();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.alert, Some(Alert::danger(NO_ROWS_MESSAGE)));
        assert_eq!(form.result, ResultArea::Empty);
    }

    #[test]
    fn test_submit_goes_pending() {
        let mut form = BulkForm::new();
        let (_, request) = form.begin_submit().unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(form.result, ResultArea::Pending);
        assert_eq!(form.alert.as_ref().map(|a| a.kind), Some(AlertKind::Info));
    }

    #[test]
    fn test_finish_submit_sets_results() {
        let mut form = BulkForm::new();
        form.add_row();
        form.add_row();
        let (ticket, _) = form.begin_submit().unwrap();

        let applied = form.finish_submit(
            ticket,
            &ok_reply(json!({ "results": [
                { "index": 0, "success": true, "part": { "id": 1, "name": "A" } },
                { "index": 1, "success": false, "error": "invalid_quantity" },
                { "index": 2, "success": true, "part": { "id": 2, "name": "C" } }
            ] })),
        );

        assert!(applied);
        assert!(form.alert.as_ref().unwrap().message.contains("Erstellt: 2, Fehler: 1"));
        assert_eq!(form.created_parts.len(), 2);
        let ResultArea::PartiallyFailed(summary) = &form.result else {
            panic!("expected partial failure");
        };
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].row, 2);
    }

    #[test]
    fn test_reply_after_reset_is_ignored() {
        let mut form = BulkForm::new();
        let (ticket, _) = form.begin_submit().unwrap();
        form.reset();

        let applied = form.finish_submit(
            ticket,
            &ok_reply(json!({ "results": [{ "index": 0, "success": true, "part": { "id": 1, "name": "A" } }] })),
        );
        assert!(!applied);
        assert_eq!(form.result, ResultArea::Empty);
        assert!(form.created_parts.is_empty());
    }

    #[test]
    fn test_only_latest_submit_applies() {
        let mut form = BulkForm::new();
        let (first, _) = form.begin_submit().unwrap();
        let (second, _) = form.begin_submit().unwrap();

        assert!(!form.finish_submit(first, &SubmitOutcome::Transport("late".to_string())));
        assert!(form.finish_submit(second, &ok_reply(json!({ "results": [] }))));
        assert_eq!(form.alert, Some(Alert::success("Erfolgreich erstellt: 0")));
    }

    #[test]
    fn test_reset_after_activity() {
        let mut form = BulkForm::new();
        let a = form.row_ids()[0];
        let b = form.add_row();
        form.update_row(a, RowField::Name("Schraube".to_string()));
        form.location_input(b, "Lag".to_string());
        let (ticket, _) = form.begin_submit().unwrap();
        form.finish_submit(
            ticket,
            &ok_reply(json!({ "results": [
                { "index": 0, "success": true, "part": { "id": 7, "name": "Schraube" } },
                { "index": 1, "success": false, "error": "missing_required_fields" }
            ] })),
        );
        assert!(!form.created_parts.is_empty());

        form.reset();

        assert_eq!(form.rows.len(), 1);
        assert_eq!(form.collect_items(), BulkForm::new().collect_items());
        assert_eq!(form.result, ResultArea::Empty);
        assert!(form.alert.is_none());
        assert!(form.created_parts.is_empty());
        assert_eq!(IDLE_RESULT, "Noch keine Aktion ausgeführt.");
    }

    #[test]
    fn test_location_flow_through_form() {
        let mut form = BulkForm::new();
        let id = form.row_ids()[0];

        let Some(InputAction::Debounce(ticket)) = form.location_input(id, "Reg".to_string()) else {
            panic!("expected debounce");
        };
        assert_eq!(form.location_debounce_elapsed(id, ticket).as_deref(), Some("Reg"));
        assert!(form.location_results(
            id,
            ticket,
            vec![
                Location { id: 3, text: "Regal 1".to_string() },
                Location { id: 4, text: "Regal 2".to_string() },
            ],
        ));
        assert!(form.location_open(id));

        let chosen = form.location_select(id, 1).unwrap();
        assert_eq!(chosen.id, 4);
        assert_eq!(form.collect_items()[0].location_id, Some(4));
        assert_eq!(form.row(id).unwrap().location.text, "Regal 2");
        assert!(!form.location_open(id));
    }

    #[test]
    fn test_empty_results_placeholder_through_form() {
        let mut form = BulkForm::new();
        let id = form.row_ids()[0];
        form.location_input(id, "zz".to_string());
        let (ticket, _) = form.location_focus(id).unwrap();
        form.location_results(id, ticket, Vec::new());

        let row = form.row(id).unwrap();
        assert_eq!(row.location.phase(), SearchPhase::ShowingEmpty);
        assert_eq!(row.location.dropdown_entries(), vec![DropdownEntry::Placeholder]);
    }

    #[test]
    fn test_removed_row_ignores_timer_and_results() {
        let mut form = BulkForm::new();
        let id = form.row_ids()[0];
        let Some(InputAction::Debounce(ticket)) = form.location_input(id, "Reg".to_string()) else {
            panic!("expected debounce");
        };
        form.remove_row(id);

        assert_eq!(form.location_debounce_elapsed(id, ticket), None);
        assert!(!form.location_results(id, ticket, Vec::new()));
    }

    #[test]
    fn test_dropdowns_are_independent() {
        let mut form = BulkForm::new();
        let a = form.row_ids()[0];
        let b = form.add_row();

        for id in [a, b] {
            form.location_input(id, "La".to_string());
            let (ticket, _) = form.location_focus(id).unwrap();
            form.location_results(id, ticket, vec![Location { id: 1, text: "Lager".to_string() }]);
        }

        form.location_dismiss(a);
        assert!(!form.location_open(a));
        assert!(form.location_open(b));
    }
}
