//! Configuration loader with environment variable support

use super::Config;
use crate::error::Result;
use config::{builder::DefaultState, ConfigBuilder, Environment, File};
use std::path::Path;

/// Well-known variables mapped onto configuration keys; later entries win
const WELL_KNOWN_ENV: &[(&str, &str)] = &[
    ("OPENROUTER_API_KEY", "provider.api_key"),
    ("OPENROUTER_MODEL", "provider.model"),
    ("NUXT_PUBLIC_SITE_URL", "provider.site_url"),
    ("PUBLIC_SITE_URL", "provider.site_url"),
];

/// Load configuration from an optional TOML file with environment variable overrides
pub fn load_config_with_env<P: AsRef<Path>>(path: P) -> Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(
            Environment::with_prefix("MATH_EXPLAINER")
                .separator("__")
                .try_parsing(true)
        );

    let config = apply_well_known_env(builder, |name| std::env::var(name).ok())?.build()?;
    Ok(config.try_deserialize()?)
}

/// Apply the well-known variables on top of every other source
fn apply_well_known_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in WELL_KNOWN_ENV {
        if let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) {
            builder = builder.set_override(*key, value)?;
        }
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    #[test]
    fn test_well_known_env_overrides() {
        let builder = apply_well_known_env(config::Config::builder(), |name| match name {
            "OPENROUTER_API_KEY" => Some("sk-or-env".to_string()),
            "PUBLIC_SITE_URL" => Some("https://mathsplainer.example".to_string()),
            _ => None,
        })
        .unwrap();

        let config: Config = builder.build().unwrap().try_deserialize().unwrap();
        assert_eq!(
            config.provider.api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("sk-or-env")
        );
        assert_eq!(config.provider.site_url, "https://mathsplainer.example");
        assert_eq!(config.provider.model, "z-ai/glm-4.5v");
    }

    #[test]
    fn test_site_url_aliases() {
        let builder = apply_well_known_env(config::Config::builder(), |name| match name {
            "NUXT_PUBLIC_SITE_URL" => Some("https://nuxt.example".to_string()),
            _ => None,
        })
        .unwrap();
        let config: Config = builder.build().unwrap().try_deserialize().unwrap();
        assert_eq!(config.provider.site_url, "https://nuxt.example");

        let builder = apply_well_known_env(config::Config::builder(), |name| match name {
            "NUXT_PUBLIC_SITE_URL" => Some("https://nuxt.example".to_string()),
            "PUBLIC_SITE_URL" => Some("https://plain.example".to_string()),
            _ => None,
        })
        .unwrap();
        let config: Config = builder.build().unwrap().try_deserialize().unwrap();
        assert_eq!(config.provider.site_url, "https://plain.example");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let builder = apply_well_known_env(config::Config::builder(), |_| Some("  ".to_string()))
            .unwrap();

        let config: Config = builder.build().unwrap().try_deserialize().unwrap();
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.site_url, "http://localhost:3000");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("math-explainer-absent-{}.toml", uuid::Uuid::new_v4()));
        let config = load_config_with_env(&path).unwrap();
        assert_eq!(config.generation.text.max_tokens, 4000);
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!("math-explainer-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[provider]\napp_title = \"Homework Helper\"\n\n[generation.text]\ntemperature = 0.1\nmax_tokens = 2000\n\n[server]\nport = 8080"
        )
        .unwrap();

        let config = load_config_with_env(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.provider.app_title, "Homework Helper");
        assert_eq!(config.generation.text.temperature, 0.1);
        assert_eq!(config.generation.text.max_tokens, 2000);
        assert_eq!(config.generation.image.max_tokens, 4000);
        assert_eq!(config.server.port, 8080);
    }
}
