//! Submission Results
//!
//! Turns the bulk-create reply into the alert, result area and created-parts
//! list shown under the grid.

use crate::models::{ApiErrorBody, BulkCreateResponse, CreatedPart, ItemResult};

pub const IDLE_RESULT: &str = "Noch keine Aktion ausgeführt.";
pub const PENDING_MESSAGE: &str = "Erstelle Produkte…";
pub const FAILED_RESULT: &str = "Keine Produkte erstellt.";
pub const NO_ROWS_MESSAGE: &str = "Keine Zeilen vorhanden.";
pub const UNKNOWN_ERROR: &str = "Unbekannter Fehler";

/// Error code the server sends when creation is switched off in settings
pub const CREATION_DISABLED: &str = "creation_disabled";
pub const CREATION_DISABLED_MESSAGE: &str = "Fehler: Das Plugin ist nicht zum Erstellen aktiviert. \
Bitte aktivieren Sie die Einstellung \"ALLOW_CREATE\" in den Plugin-Einstellungen \
(Settings → Plugin Settings → Bulk Products).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Info,
}

impl AlertKind {
    pub fn css_class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Danger => "alert-danger",
            AlertKind::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn danger(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Danger, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, message: message.into() }
    }
}

/// One itemized failure of an otherwise completed batch
#[derive(Debug, Clone, PartialEq)]
pub struct FailureLine {
    /// 1-based row position
    pub row: usize,
    pub error: String,
    pub detail: Option<String>,
}

impl FailureLine {
    fn from_result(result: &ItemResult) -> Self {
        let missing = result.missing_fields();
        let detail = non_empty(result.detail.as_deref())
            .map(str::to_string)
            .or_else(|| (!missing.is_empty()).then(|| format!("fehlt: {}", missing.join(", "))));

        Self {
            row: result.index + 1,
            error: non_empty(result.error.as_deref()).unwrap_or(UNKNOWN_ERROR).to_string(),
            detail,
        }
    }

    pub fn message(&self) -> String {
        match &self.detail {
            Some(detail) => format!("FEHLER: Zeile {}: {} ({})", self.row, self.error, detail),
            None => format!("FEHLER: Zeile {}: {}", self.row, self.error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchSummary {
    pub created: usize,
    pub failed: usize,
    pub failures: Vec<FailureLine>,
}

/// State of the result area under the grid
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultArea {
    #[default]
    Empty,
    Pending,
    Succeeded(BatchSummary),
    PartiallyFailed(BatchSummary),
    Failed,
}

/// Raw outcome of the bulk-create request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server answered; `body` may be empty or non-JSON
    Reply { status: u16, body: String },
    /// Request could not be sent or read
    Transport(String),
}

/// Everything a finished submission changes on screen
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    pub alert: Alert,
    pub result: ResultArea,
    pub created_parts: Vec<CreatedPart>,
}

impl SubmitReport {
    fn failed(alert: Alert) -> Self {
        Self { alert, result: ResultArea::Failed, created_parts: Vec::new() }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Alert for a request that never produced a usable reply
pub fn transport_failure(message: &str) -> Alert {
    let message = if message.is_empty() { UNKNOWN_ERROR } else { message };
    Alert::danger(format!("Fehler beim Erstellen: {message}"))
}

/// Alert for a non-2xx reply
pub fn rejection_alert(status: u16, body: &ApiErrorBody) -> Alert {
    if body.error.as_deref() == Some(CREATION_DISABLED) {
        return Alert::danger(CREATION_DISABLED_MESSAGE);
    }
    let message = non_empty(body.detail.as_deref())
        .or(non_empty(body.error.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Fehler ({status})"));
    Alert::danger(message)
}

/// Partition a successful batch reply into summary and created parts
pub fn summarize(response: &BulkCreateResponse) -> SubmitReport {
    let (succeeded, failed): (Vec<&ItemResult>, Vec<&ItemResult>) =
        response.results.iter().partition(|r| r.success);

    let summary = BatchSummary {
        created: succeeded.len(),
        failed: failed.len(),
        failures: failed.iter().map(|r| FailureLine::from_result(r)).collect(),
    };
    let created_parts = succeeded.iter().filter_map(|r| r.created_part()).collect();

    if summary.failed == 0 {
        SubmitReport {
            alert: Alert::success(format!("Erfolgreich erstellt: {}", summary.created)),
            result: ResultArea::Succeeded(summary),
            created_parts,
        }
    } else {
        SubmitReport {
            alert: Alert::danger(format!(
                "Erstellt: {}, Fehler: {} (Details unten)",
                summary.created, summary.failed
            )),
            result: ResultArea::PartiallyFailed(summary),
            created_parts,
        }
    }
}

/// Map any request outcome to what the user sees. Never fails.
pub fn interpret(outcome: &SubmitOutcome) -> SubmitReport {
    match outcome {
        SubmitOutcome::Transport(message) => SubmitReport::failed(transport_failure(message)),
        SubmitOutcome::Reply { status, body } if !is_success(*status) => {
            let error_body = serde_json::from_str::<ApiErrorBody>(body).unwrap_or_default();
            SubmitReport::failed(rejection_alert(*status, &error_body))
        }
        SubmitOutcome::Reply { body, .. } => match serde_json::from_str::<BulkCreateResponse>(body) {
            Ok(response) => summarize(&response),
            Err(err) => SubmitReport::failed(transport_failure(&err.to_string())),
        },
    }
}
