use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Thin typed wrapper around the attendance API. One method per remote
/// operation, one HTTP request per method; no retries, no caching. The
/// per-resource methods live in `employees.rs`, `departments.rs` and
/// `attendance.rs`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Pins the base URL instead of resolving it from the runtime
    /// config; tests point this at a local mock server.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Decodes a success body, or folds the failure into an `ApiError`.
    pub(super) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::decode_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::decode_error(response).await)
        }
    }

    /// Accepts any 2xx and ignores the body; the DELETE endpoints only
    /// answer with `{error}` on failure.
    pub(super) async fn expect_success(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::decode_error(response).await)
        }
    }

    async fn decode_error(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::server(status.as_u16()),
        }
    }
}
