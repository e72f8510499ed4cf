use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::editor::split_delimited;
use crate::models::{DocumentSeed, TemplateId};

const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Without a key the text-improvement gateway is disabled.
    pub anthropic_api_key: Option<String>,
    /// Per-call bound on gateway requests. `None` waits indefinitely.
    pub gateway_timeout: Option<Duration>,
    pub max_photo_bytes: usize,
    /// Initial document of every new session.
    pub seed: DocumentSeed,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => 8080,
        };

        let gateway_timeout = match var("GATEWAY_TIMEOUT_SECS") {
            Some(v) => {
                let secs = v
                    .trim()
                    .parse::<u64>()
                    .context("GATEWAY_TIMEOUT_SECS must be a whole number of seconds")?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => Some(Duration::from_secs(DEFAULT_GATEWAY_TIMEOUT_SECS)),
        };

        let max_photo_bytes = match var("MAX_PHOTO_BYTES") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .context("MAX_PHOTO_BYTES must be a byte count")?,
            None => DEFAULT_MAX_PHOTO_BYTES,
        };

        let defaults = DocumentSeed::default();
        let seed = DocumentSeed {
            education_placeholders: var("SEED_EDUCATION_PLACEHOLDERS")
                .map(|v| split_delimited(&v))
                .unwrap_or_default(),
            nationality: lookup("SEED_NATIONALITY").unwrap_or(defaults.nationality),
            marital_status: lookup("SEED_MARITAL_STATUS").unwrap_or(defaults.marital_status),
            template: match var("SEED_TEMPLATE") {
                Some(v) => v
                    .parse::<TemplateId>()
                    .context("SEED_TEMPLATE must name a template")?,
                None => defaults.template,
            },
            stamp_creation_date: match var("SEED_STAMP_DATE") {
                Some(v) => parse_flag(&v).context("SEED_STAMP_DATE must be true or false")?,
                None => defaults.stamp_creation_date,
            },
        };

        Ok(Config {
            port,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            anthropic_api_key: var("ANTHROPIC_API_KEY"),
            gateway_timeout,
            max_photo_bytes,
            seed,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.gateway_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.seed, DocumentSeed::default());
    }

    #[test]
    fn test_seed_is_read_from_environment() {
        let config = config_from(&[
            ("SEED_EDUCATION_PLACEHOLDERS", "Matriculation, Intermediate"),
            ("SEED_NATIONALITY", ""),
            ("SEED_TEMPLATE", "Classic"),
            ("SEED_STAMP_DATE", "no"),
        ])
        .unwrap();
        assert_eq!(
            config.seed.education_placeholders,
            vec!["Matriculation", "Intermediate"]
        );
        assert_eq!(config.seed.nationality, "");
        assert_eq!(config.seed.template, TemplateId::Classic);
        assert!(!config.seed.stamp_creation_date);
    }

    #[test]
    fn test_zero_timeout_disables_the_bound() {
        let config = config_from(&[("GATEWAY_TIMEOUT_SECS", "0")]).unwrap();
        assert_eq!(config.gateway_timeout, None);
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("ANTHROPIC_API_KEY", "  ")]).unwrap();
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_malformed_values_fail() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("SEED_TEMPLATE", "fancy")]).is_err());
        assert!(config_from(&[("SEED_STAMP_DATE", "maybe")]).is_err());
        assert!(config_from(&[("GATEWAY_TIMEOUT_SECS", "-1")]).is_err());
    }
}
