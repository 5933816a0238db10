//! Location Search Command

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::UiResult;
use crate::models::{Location, LocationSearchResponse};

/// Characters `encodeURIComponent` leaves untouched
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `<base>?q=<query>`, appending with `&` when the base already has a query
pub fn search_url(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}q={}", utf8_percent_encode(query, QUERY_COMPONENT))
}

pub async fn search_locations(base_url: &str, query: &str) -> UiResult<Vec<Location>> {
    let response = Request::get(&search_url(base_url, query)).send().await?;
    let data: LocationSearchResponse = response.json().await?;
    Ok(data.results)
}
