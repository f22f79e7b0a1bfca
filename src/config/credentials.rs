use anyhow::{Result, anyhow};

/// Environment variable holding the bearer token.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the full completion endpoint URL.
pub const ENDPOINT_VAR: &str = "GEMINI_ENDPOINT";

/// API key and endpoint for the translation service.
#[derive(Clone)]
pub struct Credentials {
    /// Sent as `Authorization: Bearer <api_key>`.
    pub api_key: String,
    /// Requests are POSTed to this URL as-is.
    pub endpoint: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Credentials {
    /// Reads both variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads both variables through `lookup`.
    ///
    /// The API key is checked first, so when both are missing the error
    /// names `GEMINI_API_KEY`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = require_var(API_KEY_VAR, &lookup)?;
        let endpoint = require_var(ENDPOINT_VAR, &lookup)?;
        Ok(Self { api_key, endpoint })
    }
}

/// Returns the value of `name`, treating an empty value as unset.
pub fn require_var<F>(name: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.is_empty()).ok_or_else(|| {
        anyhow!(
            "{name} environment variable not set\n\n\
             Set it before running:\n  \
             export {name}=\"...\""
        )
    })
}
