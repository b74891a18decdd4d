//! Keynote service, 1:1 with the REST surface behind the gateway.

use ch_api_types::{Keynote, KeynotePatch, KeynoteRequest};

use super::{delete_request, get_json, patch_json, post_json, put_json};

const BASE_PATH: &str = "/keynote-service/api/keynotes";

pub async fn list() -> Result<Vec<Keynote>, String> {
    get_json(BASE_PATH).await
}

pub async fn get(id: i64) -> Result<Keynote, String> {
    get_json(&format!("{BASE_PATH}/{id}")).await
}

pub async fn create(data: &KeynoteRequest) -> Result<(), String> {
    post_json(&format!("{BASE_PATH}/create"), data).await
}

pub async fn update(id: i64, data: &KeynoteRequest) -> Result<(), String> {
    put_json(&format!("{BASE_PATH}/{id}"), data).await
}

pub async fn patch(id: i64, data: &KeynotePatch) -> Result<(), String> {
    patch_json(&format!("{BASE_PATH}/{id}"), data).await
}

/// The deployed backend exposes keynote deletion under `/delete/{id}`,
/// unlike every other delete in this API family. Kept verbatim.
pub async fn delete(id: i64) -> Result<(), String> {
    delete_request(&format!("{BASE_PATH}/delete/{id}")).await
}
