//! Bulk Create Command

use gloo_net::http::Request;

use crate::error::UiResult;
use crate::form::submission::SubmitOutcome;
use crate::models::BulkCreateRequest;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Post the batch. Any HTTP status counts as a reply; only transport
/// failures are errors.
pub async fn bulk_create(
    api_url: &str,
    csrf_token: Option<&str>,
    request: &BulkCreateRequest,
) -> UiResult<SubmitOutcome> {
    let mut builder = Request::post(api_url);
    if let Some(token) = csrf_token {
        builder = builder.header(CSRF_HEADER, token);
    }

    let response = builder.json(request)?.send().await?;
    let status = response.status();
    // A body that cannot be read is treated like an empty one
    let body = response.text().await.unwrap_or_default();

    Ok(SubmitOutcome::Reply { status, body })
}
