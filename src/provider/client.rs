//! Chat-completion client for the OpenRouter API

use super::{ChatProvider, models::*};
use crate::config::ProviderConfig;
use crate::error::{ExplainError, Result};
use crate::explain::translator;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::{debug, error, info};

/// Client for the OpenRouter chat-completion endpoint
pub struct OpenRouterClient {
    config: ProviderConfig,
    endpoint: String,
    http_client: Client,
}

impl OpenRouterClient {
    /// Create a new provider client
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let mut client_builder = Client::builder().pool_max_idle_per_host(10);

        if let Some(timeout) = config.timeout_secs {
            client_builder = client_builder.timeout(Duration::from_secs(timeout));
        }

        let http_client = client_builder
            .build()
            .map_err(|e| ExplainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_http_client(config, http_client))
    }

    /// Create client with custom HTTP client
    pub fn with_http_client(config: ProviderConfig, http_client: Client) -> Self {
        let endpoint = config.endpoint();
        info!("Initialized provider client for {}", endpoint);

        Self {
            config,
            endpoint,
            http_client,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenRouterClient {
    async fn complete(
        &self,
        api_key: &Secret<String>,
        request: &ProviderChatRequest,
    ) -> Result<ProviderChatResponse> {
        debug!(model = %request.model, messages = request.messages.len(), "Sending chat completion request");

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose_secret())
            .header("HTTP-Referer", &self.config.site_url)
            .header("X-Title", &self.config.app_title)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Network error during chat completion request: {}", e);
                translator::transport_failure()
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read provider response body: {}", e);
            translator::transport_failure()
        })?;

        if !status.is_success() {
            let err = translator::translate_failure(Some(status.as_u16()), &body);
            if let ExplainError::Provider { message, .. } = &err {
                error!(status = status.as_u16(), "Provider API error: {}", message);
            }
            return Err(err);
        }

        serde_json::from_str::<ProviderChatResponse>(&body).map_err(|e| {
            error!("Failed to parse provider response: {}", e);
            ExplainError::MalformedProviderResponse(e.to_string())
        })
    }
}
