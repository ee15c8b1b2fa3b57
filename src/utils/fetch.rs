//! Network fetching utilities with timeout support.

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Fetch and parse JSON from a URL.
///
/// The request is raced against [`FETCH_TIMEOUT_MS`]; if the timer wins,
/// returns [`FetchError::Timeout`]. The losing request is left to finish
/// on its own since the Fetch API gives us nothing to cancel it with here.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let request = Box::pin(fetch_text(url));
    let timeout = TimeoutFuture::new(FETCH_TIMEOUT_MS);

    let text = match future::select(request, timeout).await {
        Either::Left((result, _)) => result?,
        Either::Right(_) => return Err(FetchError::Timeout),
    };

    parse_json(&text)
}

/// Parse a response body.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

async fn fetch_text(url: &str) -> Result<String, FetchError> {
    if web_sys::window().is_none() {
        return Err(FetchError::NoWindow);
    }

    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::NetworkError(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    resp.text()
        .await
        .map_err(|e| FetchError::NetworkError(e.to_string()))
}
