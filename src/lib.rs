//! Math Explainer - step-by-step math explanations from an LLM provider
//!
//! Accepts a math problem as plain text or as a data-URI encoded image,
//! builds a chat-completion request with a fixed tutoring prompt, sends it to
//! an OpenAI-compatible provider (OpenRouter by default) and returns the
//! explanation together with the model and token usage.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use math_explainer::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!
//!     let provider = Arc::new(OpenRouterClient::new(config.provider.clone())?);
//!     let explainer = Explainer::new(provider, ExplainerSettings::from_config(&config));
//!
//!     let result = explainer
//!         .explain_text(TextExplanationBody {
//!             problem: Some("Solve 2x + 3 = 7".to_string()),
//!             api_key: None,
//!         })
//!         .await?;
//!
//!     println!("{}", result.explanation);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod explain;
pub mod provider;
pub mod shutdown;

pub use config::Config;
pub use error::{ExplainError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{ApiErrorReport, ExplainError, Result};
    pub use crate::explain::{
        Explainer, ExplainerSettings, ExplanationResult, ImageExplanationBody, TextExplanationBody,
    };
    pub use crate::provider::{ChatProvider, OpenRouterClient};
}
