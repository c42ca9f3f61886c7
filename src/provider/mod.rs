//! Chat-completion provider for generating explanations via OpenRouter

pub mod client;
pub mod models;

pub use client::OpenRouterClient;
pub use models::{
    ChatMessage, ContentPart, MessageContent, ProviderChatRequest, ProviderChatResponse, Role,
    Usage,
};

use async_trait::async_trait;
use secrecy::Secret;
use crate::error::Result;

/// Trait for chat-completion providers
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send one chat-completion request, authenticated with `api_key`.
    ///
    /// Non-2xx replies and transport failures come back as
    /// [`ExplainError::Provider`](crate::error::ExplainError::Provider).
    async fn complete(
        &self,
        api_key: &Secret<String>,
        request: &ProviderChatRequest,
    ) -> Result<ProviderChatResponse>;
}
