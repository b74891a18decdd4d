//! Conference service, 1:1 with the REST surface behind the gateway.
//!
//! No validation happens here; payloads pass through unchanged and errors
//! are whatever the transport raised.

use ch_api_types::{Conference, ConferencePatch, ConferenceRequest, ReviewRequest};

use super::{delete_request, get_json, patch_json, post_json, put_json};

const BASE_PATH: &str = "/conference-service/api/conferences";

pub async fn list() -> Result<Vec<Conference>, String> {
    get_json(BASE_PATH).await
}

pub async fn get(id: i64) -> Result<Conference, String> {
    get_json(&format!("{BASE_PATH}/{id}")).await
}

pub async fn create(data: &ConferenceRequest) -> Result<(), String> {
    post_json(&format!("{BASE_PATH}/create"), data).await
}

/// Full replace of every field.
pub async fn update(id: i64, data: &ConferenceRequest) -> Result<(), String> {
    put_json(&format!("{BASE_PATH}/{id}"), data).await
}

/// Partial update; only the fields present in `data` change.
pub async fn patch(id: i64, data: &ConferencePatch) -> Result<(), String> {
    patch_json(&format!("{BASE_PATH}/{id}"), data).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    delete_request(&format!("{BASE_PATH}/{id}")).await
}

/// Append a batch of reviews. The body is the bare array.
pub async fn update_reviews(id: i64, reviews: &[ReviewRequest]) -> Result<(), String> {
    patch_json(&format!("{BASE_PATH}/{id}/reviews"), &reviews).await
}

pub async fn delete_review(conference_id: i64, review_id: i64) -> Result<(), String> {
    delete_request(&format!("{BASE_PATH}/{conference_id}/reviews/{review_id}")).await
}
