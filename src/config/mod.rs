//! Credentials and per-mode settings.
//!
//! Both entry points read their endpoint and API key from the environment
//! and refuse to start when either is missing.

mod credentials;

pub use credentials::{API_KEY_VAR, Credentials, ENDPOINT_VAR, require_var};

use std::time::Duration;

/// Which entry point is running. Selects the request timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// `translate-content`: every post under the content directories.
    Batch,
    /// `translate-local`: a single file with interactive review.
    Local,
}

impl RunMode {
    /// Timeout applied to each translation request.
    pub const fn request_timeout(self) -> Duration {
        match self {
            Self::Batch => Duration::from_secs(30),
            Self::Local => Duration::from_secs(60),
        }
    }
}
