//! HTTP client for workflow server API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the workflow server, handling authentication and response parsing.

use super::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Unwraps the `{"data": ...}` envelope the server puts around every payload.
///
#[derive(Deserialize)]
struct Wrapper<T> {
    data: T,
}

/// Makes requests to the workflow server and conforms response data to the
/// given type.
///
pub struct Client {
    pub(crate) access_token: String,
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given access token and base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(access_token: &str, base_url: &str) -> Self {
        Client {
            access_token: access_token.to_owned(),
            base_url: base_url.to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Make a GET request and return the enveloped response data or error.
    ///
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .http_client
            .get(format!("{}/{}", self.base_url, path))
            .query(params)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            return Err(ApiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        // Deserialize from raw bytes so decode failures surface the serde
        // error rather than a generic reqwest one.
        let bytes = response.bytes().await?;
        let wrapper: Wrapper<T> = serde_json::from_slice(&bytes)?;
        Ok(wrapper.data)
    }

    /// Make a bodyless POST request, discarding any response payload.
    ///
    pub async fn post(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .http_client
            .post(format!("{}/{}", self.base_url, path))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            return Err(ApiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
