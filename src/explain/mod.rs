//! Explanation pipeline: normalize input, build the prompt, call the provider,
//! translate the reply.
//!
//! Every request is handled independently. The only shared state is the
//! read-only [`ExplainerSettings`] built at startup.

pub mod models;
pub mod normalizer;
pub mod prompt;
pub mod translator;

pub use models::{
    ExplanationRequest, ExplanationResult, ImageExplanationBody, NormalizedImage,
    ResolvedRequest, TextExplanationBody,
};

use crate::config::{Config, GenerationConfig};
use crate::error::Result;
use crate::provider::ChatProvider;
use secrecy::Secret;
use std::sync::Arc;
use tracing::{info, instrument};

/// Process-wide settings the pipeline reads on every request
#[derive(Debug, Clone)]
pub struct ExplainerSettings {
    /// Default credential used when a request carries no key
    pub default_api_key: Option<Secret<String>>,
    pub model: String,
    pub generation: GenerationConfig,
}

impl ExplainerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_api_key: config.provider.api_key.clone(),
            model: config.provider.model.clone(),
            generation: config.generation.clone(),
        }
    }
}

/// Entry point for both request kinds
#[derive(Clone)]
pub struct Explainer {
    provider: Arc<dyn ChatProvider>,
    settings: Arc<ExplainerSettings>,
}

impl Explainer {
    pub fn new(provider: Arc<dyn ChatProvider>, settings: ExplainerSettings) -> Self {
        Self {
            provider,
            settings: Arc::new(settings),
        }
    }

    /// Explain a typed math problem
    #[instrument(skip_all, fields(kind = "text"))]
    pub async fn explain_text(&self, body: TextExplanationBody) -> Result<ExplanationResult> {
        let request = normalizer::normalize_text(&body)?;
        let api_key = normalizer::resolve_api_key(body.api_key.as_deref(), self.settings.default_api_key.as_ref())?;

        self.run(ResolvedRequest { request, api_key }).await
    }

    /// Explain a photographed or screenshotted math problem
    #[instrument(skip_all, fields(kind = "image"))]
    pub async fn explain_image(&self, body: ImageExplanationBody) -> Result<ExplanationResult> {
        let request = normalizer::normalize_image(&body)?;
        let api_key = normalizer::resolve_api_key(body.api_key.as_deref(), self.settings.default_api_key.as_ref())?;

        self.run(ResolvedRequest { request, api_key }).await
    }

    async fn run(&self, resolved: ResolvedRequest) -> Result<ExplanationResult> {
        let chat_request = prompt::build_request(
            &resolved.request,
            &self.settings.model,
            &self.settings.generation,
        );

        let response = self.provider.complete(&resolved.api_key, &chat_request).await?;
        let result = translator::translate_success(response, &self.settings.model)?;

        info!(
            model = %result.model,
            total_tokens = ?result.usage.as_ref().and_then(|u| u.total_tokens),
            explanation_len = result.explanation.len(),
            "Explanation generated"
        );

        Ok(result)
    }
}
