//! Client configuration read from the environment.

use fintrack_core::errors::{Error, Result};
use fintrack_core::session::SessionContext;

/// Default base URL of the hosted API.
pub const DEFAULT_API_URL: &str = "https://income-server.vercel.app/api";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_URL: &str = "FINTRACK_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "FINTRACK_API_TIMEOUT_SECS";
pub const ENV_TOKEN: &str = "FINTRACK_TOKEN";
pub const ENV_ROLE: &str = "FINTRACK_ROLE";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Session persisted from an earlier login, if any.
    pub session: Option<SessionContext>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = value(ENV_API_URL)
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match value(ENV_TIMEOUT_SECS) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::Config(format!("{} must be a positive integer, got '{}'", ENV_TIMEOUT_SECS, raw))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let session = match (value(ENV_TOKEN), value(ENV_ROLE)) {
            (Some(token), Some(role)) => Some(SessionContext::new(token, role.parse()?)),
            (Some(token), None) => Some(SessionContext::new(token, Default::default())),
            (None, _) => None,
        };

        Ok(Self {
            base_url,
            timeout_secs,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_core::session::Role;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = ApiConfig::from_lookup(lookup(&[
            (ENV_API_URL, "http://localhost:5000/api/ "),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_TOKEN, "abc"),
            (ENV_ROLE, "admin"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.session, Some(SessionContext::new("abc", Role::Admin)));
    }

    #[test]
    fn test_token_without_role_is_read_only() {
        let config = ApiConfig::from_lookup(lookup(&[(ENV_TOKEN, "abc")])).unwrap();
        assert_eq!(config.session.map(|s| s.role), Some(Role::User));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = ApiConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_role() {
        let result = ApiConfig::from_lookup(lookup(&[(ENV_TOKEN, "abc"), (ENV_ROLE, "root")]));
        assert!(result.is_err());
    }
}
