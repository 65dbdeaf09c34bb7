//! Collection Point Registration

use gloo_net::http::Request;

use crate::config::API_URL;
use crate::error::ApiError;
use crate::models::PointPayload;

use super::{endpoint, ensure_ok};

/// POST the point once. Any response body is ignored.
pub async fn create_point(payload: &PointPayload) -> Result<(), ApiError> {
    let url = endpoint(API_URL, "points");
    log::info!("Registering point '{}' with {} items", payload.name, payload.items.len());

    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response)?;
    Ok(())
}
