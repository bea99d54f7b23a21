use std::time::Duration;

use crate::error::PalletizerError;

/// Production endpoint of the packing service.
pub const DEFAULT_API_URL: &str = "https://api.palletizer.app";

/// Whole-request timeout applied to the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Overrides [`DEFAULT_API_URL`].
pub const ENV_API_URL: &str = "PALLETIZER_API_URL";

/// Overrides [`DEFAULT_TIMEOUT`], in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "PALLETIZER_TIMEOUT_SECS";

/// Client binding: where to send requests and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Defaults with `PALLETIZER_API_URL` / `PALLETIZER_TIMEOUT_SECS` applied.
    pub fn from_env() -> Result<Self, PalletizerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PalletizerError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                PalletizerError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))
            })?;
            if secs == 0 {
                return Err(PalletizerError::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
