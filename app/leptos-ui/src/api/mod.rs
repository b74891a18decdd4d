//! HTTP plumbing shared by the domain services.
//!
//! Thin wrappers over the browser `fetch` API. Every request goes through
//! the gateway and carries `Authorization: Bearer <token>` when a session
//! token is present. Failures (network error or non-2xx status) come back
//! as `Err(String)`; there is no retry, timeout or backoff here.

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::auth;

pub mod conferences;
pub mod keynotes;

/// Single network entry point routing to the backend services.
pub const GATEWAY_URL: &str = "http://localhost:8888";

fn build_request(method: &str, path: &str, body: Option<String>) -> Result<Request, String> {
    let url = format!("{GATEWAY_URL}{path}");
    let opts = RequestInit::new();
    opts.set_method(method);

    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{:?}", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{:?}", e))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{:?}", e))?;
    }
    if let Some(token) = auth::token() {
        request
            .headers()
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| format!("{:?}", e))?;
    }
    Ok(request)
}

async fn send(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or("no global window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{:?}", e))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let request = build_request("GET", path, None)?;
    read_json(send(request).await?).await
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, String> {
    serde_json::to_string(body).map_err(|e| format!("{:?}", e))
}

// Mutations return no payload the views care about; a 2xx status is the
// whole contract.

pub(crate) async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let request = build_request("POST", path, Some(encode_body(body)?))?;
    send(request).await.map(|_| ())
}

pub(crate) async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let request = build_request("PUT", path, Some(encode_body(body)?))?;
    send(request).await.map(|_| ())
}

pub(crate) async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let request = build_request("PATCH", path, Some(encode_body(body)?))?;
    send(request).await.map(|_| ())
}

pub(crate) async fn delete_request(path: &str) -> Result<(), String> {
    let request = build_request("DELETE", path, None)?;
    send(request).await.map(|_| ())
}
