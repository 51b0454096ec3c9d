//! Network fetching utilities with timeout support.
//!
//! GET requests are raced against a timeout; POST requests are additionally
//! aborted through an `AbortController` when the timeout wins.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::core::host::HttpReply;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined, which is how a timeout is told apart.
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(
            e.as_string()
                .or_else(|| e.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
                .unwrap_or_else(|| "Unknown error".to_string()),
        ),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// GET a URL as text, failing on non-2xx statuses or after
/// `FETCH_TIMEOUT_MS`.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    match race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }
            read_text(&resp).await
        }
    }
}

/// POST `body` as JSON and return the raw reply whatever its status.
///
/// The request is aborted if no response arrives within `timeout_ms`.
pub async fn post_json<B: Serialize>(
    url: &str,
    body: &B,
    timeout_ms: i32,
) -> Result<HttpReply, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let payload =
        serde_json::to_string(body).map_err(|e| FetchError::JsonParseError(e.to_string()))?;

    let controller = AbortController::new().map_err(|_| FetchError::RequestCreationFailed)?;
    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&payload));
    opts.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    match race_with_timeout(window.fetch_with_request(&request), timeout_ms).await {
        RaceResult::TimedOut => {
            controller.abort();
            Err(FetchError::Timeout)
        }
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
            Ok(HttpReply {
                status: resp.status(),
                status_text: resp.status_text(),
                body: read_text(&resp).await.unwrap_or_default(),
            })
        }
    }
}

async fn read_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}
