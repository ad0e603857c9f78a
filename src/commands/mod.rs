//! REST Command Wrappers
//!
//! Frontend bindings to the backend's REST API, organized by domain.

mod sample;
mod technique;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config;

// Re-export all public items
pub use sample::*;
pub use technique::*;

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request could not be sent or the connection failed
    Network(String),
    /// Backend answered with a non-2xx status
    Status(u16, String),
    /// Response body was not the expected JSON
    Decode(String),
    /// Request body could not be serialized
    Encode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code, text) => write!(f, "HTTP {} {}", code, text),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Encode(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Send a request and check the status
async fn fetch(method: &str, path: &str, body: Option<String>) -> ApiResult<web_sys::Response> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let init = web_sys::RequestInit::new();
    init.set_method(method);
    init.set_mode(web_sys::RequestMode::Cors);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let url = config::get().url(path);
    let request = web_sys::Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_error)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(js_error)?;
    }

    log::debug!("{} {}", method, url);
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        log::warn!("{} {} -> {}", method, url, response.status());
        return Err(ApiError::Status(response.status(), response.status_text()));
    }
    Ok(response)
}

/// GET a JSON document
async fn get_json<R: DeserializeOwned>(path: &str) -> ApiResult<R> {
    let response = fetch("GET", path, None).await?;
    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a JSON body, ignoring the response body
async fn send_json<B: Serialize>(method: &str, path: &str, body: &B) -> ApiResult<()> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    fetch(method, path, Some(body)).await?;
    Ok(())
}

/// Send a request without a body, ignoring the response body
async fn send_empty(method: &str, path: &str) -> ApiResult<()> {
    fetch(method, path, None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::Status(409, "Conflict".to_string()).to_string(),
            "HTTP 409 Conflict"
        );
        assert_eq!(
            ApiError::Decode("missing field `id`".to_string()).to_string(),
            "Invalid response: missing field `id`"
        );
    }
}
