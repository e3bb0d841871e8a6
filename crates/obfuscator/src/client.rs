//! Obfuscation with fallback to the original script.
//!
//! [`ObfuscationClient::obfuscate`] runs the two-step exchange
//! (create session, then transform) strictly in sequence with no retries.
//! Any failure yields [`ObfuscationOutcome::Degraded`] carrying the input
//! unchanged, so the caller always has code to deliver.

use std::time::Duration;

use xevic_core::{DegradedReason, ObfuscationOutcome};

use crate::api::{LuaObfuscatorApi, ObfuscatorApiError};
use crate::settings::ObfuscationSettings;

/// Which call of the exchange failed, for mapping errors to reasons.
#[derive(Debug, Clone, Copy)]
enum Step {
    Session,
    Transform,
}

/// Obfuscation client. Without an API key every call degrades immediately.
pub struct ObfuscationClient {
    api: Option<LuaObfuscatorApi>,
    settings: ObfuscationSettings,
}

impl ObfuscationClient {
    /// Create a client sharing the caller's HTTP client.
    ///
    /// `timeout` bounds each of the two calls individually.
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        let api = api_key.map(|key| LuaObfuscatorApi::new(client, api_url, key, timeout));
        Self {
            api,
            settings: ObfuscationSettings::default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api.is_some()
    }

    /// Obfuscate `script`, falling back to `script` itself on any failure.
    pub async fn obfuscate(&self, script: &str) -> ObfuscationOutcome {
        let Some(api) = &self.api else {
            tracing::debug!("No obfuscator API key configured; returning original script");
            return ObfuscationOutcome::degraded(script, DegradedReason::Unconfigured);
        };

        let session = match api.new_script(script).await {
            Ok(session) => session,
            Err(e) => return Self::degrade(script, Step::Session, e),
        };

        match api.obfuscate(&session, &self.settings).await {
            Ok(Some(code)) => ObfuscationOutcome::Obfuscated(code),
            Ok(None) => {
                tracing::warn!("Obfuscate response carried no code; returning original script");
                ObfuscationOutcome::degraded(script, DegradedReason::MissingCode)
            }
            Err(e) => Self::degrade(script, Step::Transform, e),
        }
    }

    /// Log a failed step and wrap the original script as a degraded outcome.
    fn degrade(script: &str, step: Step, err: ObfuscatorApiError) -> ObfuscationOutcome {
        let reason = match err {
            ObfuscatorApiError::ApiError { status, body } => {
                tracing::warn!(?step, status, body = %body, "Obfuscator returned non-200 status");
                match step {
                    Step::Session => DegradedReason::SessionRejected { status },
                    Step::Transform => DegradedReason::TransformRejected { status },
                }
            }
            ObfuscatorApiError::MissingSessionId(body) => {
                tracing::warn!(body = %body, "No sessionId returned from obfuscator");
                DegradedReason::MissingSessionId
            }
            other => {
                tracing::error!(?step, error = ?other, "Obfuscation error");
                DegradedReason::Transport(other.to_string())
            }
        };
        ObfuscationOutcome::degraded(script, reason)
    }
}
