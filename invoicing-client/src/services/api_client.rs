//! Thin HTTP transport over the goahead REST API.
//!
//! Attaches the bearer credential, maps non-2xx statuses onto the shared
//! error taxonomy, and leaves retries and classification to the caller.

use std::sync::Arc;
use std::time::Duration;

use client_core::error::ClientError;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiSettings;
use crate::services::token::TokenProvider;

pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, tokens: Arc<dyn TokenProvider>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let request = match self.tokens.bearer_token() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "HTTP request failed");
            ClientError::from(e)
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let err = ClientError::from_response(response).await;
            tracing::error!(error = %err, "request rejected by server");
            Err(err)
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let response = self
            .send(self.client.get(self.url(path)).query(query))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.send(self.client.put(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    /// PUT whose response body carries nothing of interest.
    pub async fn put_no_content<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        self.send(self.client.put(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}
