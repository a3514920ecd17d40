//! HTTP client abstraction shared by the document fetcher and the
//! completion provider

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for HTTP operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + Debug {
    /// GET a URL and return the response body as text
    async fn get_text(&self, url: &str) -> Result<String, DomainError>;

    /// POST a JSON body and parse the JSON response
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_text(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::internal(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::internal(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to read response body: {}", e)))
    }

    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::internal(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::internal(format!(
                "HTTP {}: {}",
                status, error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use super::*;

    /// Mock HTTP client with canned responses keyed by URL
    #[derive(Debug, Default)]
    pub struct MockHttpClient {
        text_responses: RwLock<HashMap<String, String>>,
        json_responses: RwLock<HashMap<String, serde_json::Value>>,
        errors: RwLock<HashMap<String, String>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_text(self, url: impl Into<String>, body: impl Into<String>) -> Self {
            self.text_responses
                .write()
                .unwrap()
                .insert(url.into(), body.into());
            self
        }

        pub fn with_json(self, url: impl Into<String>, response: serde_json::Value) -> Self {
            self.json_responses
                .write()
                .unwrap()
                .insert(url.into(), response);
            self
        }

        pub fn with_error(self, url: impl Into<String>, error: impl Into<String>) -> Self {
            self.errors.write().unwrap().insert(url.into(), error.into());
            self
        }

        fn check_error(&self, url: &str) -> Result<(), DomainError> {
            if let Some(error) = self.errors.read().unwrap().get(url) {
                return Err(DomainError::internal(error.clone()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn get_text(&self, url: &str) -> Result<String, DomainError> {
            self.check_error(url)?;

            self.text_responses
                .read()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| DomainError::internal(format!("No mock response for {}", url)))
        }

        async fn post_json(
            &self,
            url: &str,
            _headers: Vec<(&str, &str)>,
            _body: &serde_json::Value,
        ) -> Result<serde_json::Value, DomainError> {
            self.check_error(url)?;

            self.json_responses
                .read()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| DomainError::internal(format!("No mock response for {}", url)))
        }
    }
}
