//! Backend API Wrappers
//!
//! Frontend bindings to the pharmacy HTTP endpoints, organized by page.

mod comparison;
mod records;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::ApiError;

// Re-export all public items
pub use comparison::*;
pub use records::*;

// ========================
// Fetch Helpers
// ========================

/// GET `url` and decode its JSON body
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = send(url, "GET", None).await?;
    read_json(url, &response).await
}

/// POST `url` with an optional JSON body, decode the JSON answer
async fn post_json<B, T>(url: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = body.map(encode).transpose()?;
    let response = send(url, "POST", body.as_deref()).await?;
    read_json(url, &response).await
}

/// POST `url` with a JSON body, only check the status
async fn post_unit<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<(), ApiError> {
    let body = encode(body)?;
    send(url, "POST", Some(&body)).await.map(|_| ())
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

async fn send(url: &str, method: &str, body: Option<&str>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ApiError::network(url, e))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::network(url, e))?;
    }

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::network(url, e))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::decode(url, "fetch did not yield a Response"))?;

    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(url: &str, response: &Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|e| ApiError::decode(url, format!("{:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::decode(url, format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::decode(url, e))
}
