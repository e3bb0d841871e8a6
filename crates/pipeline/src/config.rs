use std::fmt;
use std::time::Duration;

use xevic_obfuscator::api::DEFAULT_API_URL;

/// Default timeout for each outbound call made while handling a submission.
pub const DEFAULT_OUTBOUND_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for each obfuscation service call.
pub const DEFAULT_OBFUSCATION_TIMEOUT: Duration = Duration::from_secs(25);

/// Outbound configuration, built once at startup and shared.
///
/// Missing secrets are not errors: without an API key scripts are returned
/// unchanged, and without a webhook URL notification is skipped.
#[derive(Clone)]
pub struct PipelineConfig {
    /// luaobfuscator.com API key (`LUAOBFUSCATOR_API_KEY`).
    pub api_key: Option<String>,
    /// Notification webhook URL (`WEBHOOK_URL`).
    pub webhook_url: Option<String>,
    /// Obfuscation API base URL (`LUAOBFUSCATOR_API_URL`).
    pub obfuscator_url: String,
    /// Timeout applied by the per-submission HTTP client.
    pub outbound_timeout: Duration,
    /// Timeout for each of the two obfuscation calls.
    pub obfuscation_timeout: Duration,
}

impl PipelineConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                 | Default                                       |
    /// |-------------------------|-----------------------------------------------|
    /// | `LUAOBFUSCATOR_API_KEY` | unset (obfuscation disabled)                  |
    /// | `WEBHOOK_URL`           | unset (notification disabled)                 |
    /// | `LUAOBFUSCATOR_API_URL` | `https://api.luaobfuscator.com/v1/obfuscator` |
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_key: get("LUAOBFUSCATOR_API_KEY"),
            webhook_url: get("WEBHOOK_URL"),
            obfuscator_url: get("LUAOBFUSCATOR_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            outbound_timeout: DEFAULT_OUTBOUND_TIMEOUT,
            obfuscation_timeout: DEFAULT_OBFUSCATION_TIMEOUT,
        }
    }
}

impl Default for PipelineConfig {
    /// No secrets, default vendor URL and timeouts.
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("PipelineConfig")
            .field("api_key", &redact(&self.api_key))
            .field("webhook_url", &redact(&self.webhook_url))
            .field("obfuscator_url", &self.obfuscator_url)
            .field("outbound_timeout", &self.outbound_timeout)
            .field("obfuscation_timeout", &self.obfuscation_timeout)
            .finish()
    }
}
