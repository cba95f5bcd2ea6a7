//! Cohort and endpoint configuration.
//!
//! Each value comes from an explicit option first, then its environment
//! variable, then the built-in default.

use crate::{
    PuppyBowlError, Result, API_URL_ENV_VAR, COHORT_ENV_VAR, DEFAULT_API_ROOT, DEFAULT_COHORT,
};

/// Resolved endpoint settings for an [`ApiClient`](crate::api::http::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_root: String,
    pub cohort: String,
}

impl ClientConfig {
    pub fn new(api_root: impl Into<String>, cohort: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            cohort: cohort.into(),
        }
    }

    /// Resolve both values from CLI options and the environment.
    pub fn resolve(api_root: Option<String>, cohort: Option<String>) -> Result<Self> {
        Ok(Self {
            api_root: resolve_api_root(api_root)?,
            cohort: resolve_cohort(cohort)?,
        })
    }

    /// `{api_root}/{cohort}` with no trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.api_root.trim_end_matches('/'), self.cohort)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ROOT, DEFAULT_COHORT)
    }
}

/// Resolve cohort name from option or environment variable
pub fn resolve_cohort(cohort: Option<String>) -> Result<String> {
    resolve_value(cohort, COHORT_ENV_VAR, DEFAULT_COHORT)
}

/// Resolve API root from option or environment variable
pub fn resolve_api_root(api_root: Option<String>) -> Result<String> {
    resolve_value(api_root, API_URL_ENV_VAR, DEFAULT_API_ROOT)
}

fn resolve_value(explicit: Option<String>, env_var: &str, default: &str) -> Result<String> {
    let value = explicit
        .or_else(|| std::env::var(env_var).ok())
        .unwrap_or_else(|| default.to_string());

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PuppyBowlError::InvalidConfig {
            name: env_var.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_joins_root_and_cohort() {
        let config = ClientConfig::new("http://localhost:3000/api/", "2408-TEST");
        assert_eq!(config.base_url(), "http://localhost:3000/api/2408-TEST");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(
            config.base_url(),
            "https://fsa-puppy-bowl.herokuapp.com/api/2408-FTB-MT-WEB-PT"
        );
    }

    #[test]
    fn test_explicit_value_wins() {
        let value = resolve_value(Some("explicit".to_string()), "PUPPY_BOWL_UNSET_VAR", "x");
        assert_eq!(value.unwrap(), "explicit");
    }

    #[test]
    fn test_default_used_when_nothing_set() {
        std::env::remove_var("PUPPY_BOWL_UNSET_VAR");
        let value = resolve_value(None, "PUPPY_BOWL_UNSET_VAR", "fallback");
        assert_eq!(value.unwrap(), "fallback");
    }

    #[test]
    fn test_empty_value_rejected() {
        let result = resolve_value(Some("  ".to_string()), "PUPPY_BOWL_UNSET_VAR", "x");
        match result.unwrap_err() {
            PuppyBowlError::InvalidConfig { name } => assert_eq!(name, "PUPPY_BOWL_UNSET_VAR"),
            _ => panic!("Expected InvalidConfig error"),
        }
    }
}
