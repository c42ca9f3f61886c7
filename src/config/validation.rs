//! Configuration validation

use super::*;
use crate::error::{ExplainError, Result};

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_provider_config(&config.provider)?;
    validate_generation_params("text", &config.generation.text)?;
    validate_generation_params("image", &config.generation.image)?;
    validate_server_config(&config.server)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate provider configuration
fn validate_provider_config(config: &ProviderConfig) -> Result<()> {
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ExplainError::Config(
            "Provider base URL must start with http:// or https://".to_string()
        ));
    }

    if config.model.trim().is_empty() {
        return Err(ExplainError::Config(
            "Provider model cannot be empty".to_string()
        ));
    }

    if config.app_title.trim().is_empty() {
        return Err(ExplainError::Config(
            "Application title cannot be empty".to_string()
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ExplainError::Config(
            "Provider timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate one set of generation parameters
fn validate_generation_params(kind: &str, params: &GenerationParams) -> Result<()> {
    if !(0.0..=2.0).contains(&params.temperature) {
        return Err(ExplainError::Config(
            format!("{} temperature must be between 0.0 and 2.0", kind)
        ));
    }

    if params.max_tokens == 0 {
        return Err(ExplainError::Config(
            format!("{} max_tokens must be greater than 0", kind)
        ));
    }

    Ok(())
}

/// Validate server configuration
pub fn validate_server_config(config: &ServerConfig) -> Result<()> {
    if config.port == 0 {
        return Err(ExplainError::Config(
            "Server port cannot be 0".to_string()
        ));
    }

    if config.max_body_size_mb > MAX_BODY_SIZE_MB_LIMIT {
        return Err(ExplainError::Config(
            format!("Max body size too large (max: {} MB)", MAX_BODY_SIZE_MB_LIMIT)
        ));
    }

    if config.host.is_empty() {
        return Err(ExplainError::Config(
            "Server host cannot be empty".to_string()
        ));
    }

    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    match config.format.as_str() {
        "json" | "compact" | "pretty" => Ok(()),
        other => Err(ExplainError::Config(
            format!("Unknown log format '{}' (expected json, compact or pretty)", other)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.provider.base_url = "openrouter.ai/api/v1".to_string();

        assert!(validate_provider_config(&config.provider).is_err());
    }

    #[test]
    fn test_empty_model() {
        let mut config = Config::default();
        config.provider.model = " ".to_string();

        assert!(validate_provider_config(&config.provider).is_err());
    }

    #[test]
    fn test_invalid_temperature() {
        let params = GenerationParams { temperature: 2.5, max_tokens: 100 };
        assert!(validate_generation_params("text", &params).is_err());
    }

    #[test]
    fn test_zero_max_tokens() {
        let params = GenerationParams { temperature: 0.3, max_tokens: 0 };
        assert!(validate_generation_params("image", &params).is_err());
    }

    #[test]
    fn test_invalid_server_port() {
        let mut config = Config::default();
        config.server.port = 0;

        assert!(validate_server_config(&config.server).is_err());
    }

    #[test]
    fn test_oversized_body_limit() {
        let mut config = Config::default();
        config.server.max_body_size_mb = usize::MAX;
        assert!(validate_server_config(&config.server).is_err());

        config.server.max_body_size_mb = MAX_BODY_SIZE_MB_LIMIT;
        assert!(validate_server_config(&config.server).is_ok());
    }

    #[test]
    fn test_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        assert!(validate_config(&config).is_err());
    }
}
