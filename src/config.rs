use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_RETRY_BACKOFF_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub retry_backoff: Duration,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first
    /// if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parse_or(&lookup, "MCQ_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "MCQ_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::ConfigMissing(API_KEY_VAR.to_string()))?;

        Ok(Self {
            api_key,
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout: Duration::from_secs(timeout_secs),
            retry_backoff: Duration::from_millis(
                parse_or(&lookup, "MCQ_RETRY_BACKOFF_MS", DEFAULT_RETRY_BACKOFF_MS)?,
            ),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::InvalidConfig(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::ConfigMissing(ref name) if name == API_KEY_VAR));

        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, Error::ConfigMissing(_)));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.retry_backoff, Duration::from_millis(1000));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "secret"),
            ("GEMINI_MODEL", "gemini-test"),
            ("GEMINI_BASE_URL", "http://127.0.0.1:9000/"),
            ("MCQ_TIMEOUT_SECS", "5"),
            ("MCQ_RETRY_BACKOFF_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry_backoff, Duration::ZERO);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "secret"),
            ("MCQ_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains("at least 1")));
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "secret"),
            ("MCQ_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains("MCQ_TIMEOUT_SECS")));
    }
}
