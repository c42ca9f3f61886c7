//! Configuration management for the math explainer service

use serde::{Deserialize, Serialize};
use secrecy::Secret;

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the chat-completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider API base URL, `/chat/completions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Process-wide default API key (secured, never serialized)
    #[serde(default, skip_serializing, deserialize_with = "deserialize_optional_secret")]
    pub api_key: Option<Secret<String>>,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Public site URL sent as the `HTTP-Referer` attribution header
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Application name sent as the `X-Title` attribution header
    #[serde(default = "default_app_title")]
    pub app_title: String,

    /// Request timeout in seconds; unset keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Fixed generation parameters, one set per request kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub text: GenerationParams,
    #[serde(default)]
    pub image: GenerationParams,
}

/// Sampling parameters for one request kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server port
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Server host
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Maximum request body size in MB (0 = unlimited)
    #[serde(default = "default_max_body_size")]
    pub max_body_size_mb: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json, compact or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String { "https://openrouter.ai/api/v1".to_string() }
fn default_model() -> String { "z-ai/glm-4.5v".to_string() }
fn default_site_url() -> String { "http://localhost:3000".to_string() }
fn default_app_title() -> String { "MathSplainer".to_string() }
fn default_temperature() -> f64 { 0.3 }
fn default_max_tokens() -> u32 { 4000 }
fn default_server_port() -> u16 { 3000 }
fn default_server_host() -> String { "0.0.0.0".to_string() }
fn default_max_body_size() -> usize { 10 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            site_url: default_site_url(),
            app_title: default_app_title(),
            timeout_secs: None,
        }
    }
}

impl ProviderConfig {
    /// Full chat-completion endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Upper bound for `server.max_body_size_mb`
pub const MAX_BODY_SIZE_MB_LIMIT: usize = 1024;

impl ServerConfig {
    /// Body size limit in bytes (0 = unlimited), capped at [`MAX_BODY_SIZE_MB_LIMIT`]
    pub fn max_body_size_bytes(&self) -> usize {
        self.max_body_size_mb.min(MAX_BODY_SIZE_MB_LIMIT) * 1024 * 1024
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            host: default_server_host(),
            max_body_size_mb: default_max_body_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from the environment and an optional TOML file
    pub fn load() -> crate::error::Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let config = loader::load_config_with_env(path)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }
}

/// Deserialize an optional secret, treating an empty string as absent
fn deserialize_optional_secret<'de, D>(deserializer: D) -> Result<Option<Secret<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()).map(Secret::new))
}
