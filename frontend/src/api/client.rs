use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.client.get(format!("{}{}", base_url, path));
        // Session cookies live on the API origin.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::unauthorized());
        }
        Err(response.json::<ApiError>().await.unwrap_or_else(|_| {
            ApiError::request_failed(format!("Request failed with status {}", status))
        }))
    }

    pub async fn get_me(&self) -> Result<IdentityResponse, ApiError> {
        self.get_json("/auth/me").await
    }

    pub async fn get_news(&self) -> Result<Vec<NewsItem>, ApiError> {
        self.get_json("/news").await
    }
}
