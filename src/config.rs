// src/config.rs
use crate::errors::SnapError;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub bind_addr: String,
    /// No timeout unless configured.
    pub generation_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, SnapError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SnapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key = non_empty("GEMINI_API_KEY")
            .or_else(|| non_empty("API_KEY"))
            .ok_or_else(|| SnapError::Config("GEMINI_API_KEY must be set".to_string()))?;

        let generation_timeout = match non_empty("GENERATION_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    SnapError::Config(format!("GENERATION_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: non_empty("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            generation_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, SnapError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn requires_api_key() {
        assert!(matches!(config_from(&[]), Err(SnapError::Config(_))));
        assert!(matches!(
            config_from(&[("GEMINI_API_KEY", "  ")]),
            Err(SnapError::Config(_))
        ));
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("GEMINI_API_KEY", "k")]).unwrap();
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.generation_timeout.is_none());
    }

    #[test]
    fn accepts_legacy_key_name_and_timeout() {
        let config = config_from(&[
            ("API_KEY", "legacy"),
            ("GENERATION_TIMEOUT_SECS", "90"),
            ("GEMINI_MODEL", "gemini-3-pro-image-preview"),
        ])
        .unwrap();
        assert_eq!(config.gemini_api_key, "legacy");
        assert_eq!(config.generation_timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.gemini_model, "gemini-3-pro-image-preview");
    }

    #[test]
    fn rejects_bad_timeout() {
        assert!(matches!(
            config_from(&[("GEMINI_API_KEY", "k"), ("GENERATION_TIMEOUT_SECS", "soon")]),
            Err(SnapError::Config(_))
        ));
    }
}
