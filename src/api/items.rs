//! Item Catalog

use crate::config::API_URL;
use crate::error::ApiError;
use crate::models::Item;

use super::{endpoint, get_json};

pub async fn list_items() -> Result<Vec<Item>, ApiError> {
    get_json(&endpoint(API_URL, "items")).await
}
