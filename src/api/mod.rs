//! HTTP API Wrappers
//!
//! Frontend bindings to the Ecoleta backend and the IBGE service,
//! organized by remote.

mod ibge;
mod items;
mod points;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

// Re-export all public items
pub use ibge::*;
pub use items::*;
pub use points::*;

/// Join a base URL and a relative path with exactly one slash
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// GET `url` and decode a JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = ensure_ok(response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Reject any non-2xx response
pub(crate) fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        assert_eq!(endpoint("http://localhost:3333", "items"), "http://localhost:3333/items");
        assert_eq!(endpoint("http://localhost:3333/", "/points"), "http://localhost:3333/points");
    }
}
