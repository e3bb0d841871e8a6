//! REST API wrapper for the luaobfuscator.com endpoints.
//!
//! Both calls authenticate with an `apikey` header. `newscript` uploads the
//! raw script as `text/plain` and returns a session id; `obfuscate` takes
//! that id in a `sessionId` header plus a JSON settings body and returns the
//! transformed code.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::settings::ObfuscationSettings;

/// Default API base; endpoints are `{base}/newscript` and `{base}/obfuscate`.
pub const DEFAULT_API_URL: &str = "https://api.luaobfuscator.com/v1/obfuscator";

/// HTTP client for the obfuscation service.
pub struct LuaObfuscatorApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    timeout: Duration,
}

/// A script session created on the service, consumed by the transform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObfuscationSession {
    pub session_id: String,
}

/// Response of `POST /newscript`.
#[derive(Debug, Deserialize)]
struct NewScriptResponse {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

/// Response of `POST /obfuscate`.
#[derive(Debug, Deserialize)]
struct ObfuscateResponse {
    code: Option<String>,
}

/// Errors from the obfuscation REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ObfuscatorApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a status other than 200.
    #[error("Obfuscator API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// `newscript` succeeded but returned no usable session id.
    #[error("No sessionId returned: {0}")]
    MissingSessionId(String),

    /// The response body was not the expected JSON.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LuaObfuscatorApi {
    /// Create an API client reusing an existing [`reqwest::Client`].
    ///
    /// * `api_url` - Base URL without trailing slash.
    /// * `timeout` - Per-call timeout, overriding the client default.
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Upload a script and open a session for it.
    ///
    /// Sends `POST {base}/newscript` with the raw script as the body.
    pub async fn new_script(&self, script: &str) -> Result<ObfuscationSession, ObfuscatorApiError> {
        let response = self
            .client
            .post(format!("{}/newscript", self.api_url))
            .header("apikey", &self.api_key)
            .header(CONTENT_TYPE, "text/plain")
            .timeout(self.timeout)
            .body(script.to_string())
            .send()
            .await?;

        let bytes = Self::ensure_ok(response).await?.bytes().await?;
        let parsed: NewScriptResponse = serde_json::from_slice(&bytes)?;

        match parsed.session_id.filter(|id| !id.is_empty()) {
            Some(session_id) => Ok(ObfuscationSession { session_id }),
            None => Err(ObfuscatorApiError::MissingSessionId(
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
        }
    }

    /// Transform the script held by `session`.
    ///
    /// Sends `POST {base}/obfuscate` with the settings as JSON. Returns
    /// `Ok(None)` when the response carries no `code` field.
    pub async fn obfuscate(
        &self,
        session: &ObfuscationSession,
        settings: &ObfuscationSettings,
    ) -> Result<Option<String>, ObfuscatorApiError> {
        let response = self
            .client
            .post(format!("{}/obfuscate", self.api_url))
            .header("apikey", &self.api_key)
            .header("sessionId", &session.session_id)
            .timeout(self.timeout)
            .json(settings)
            .send()
            .await?;

        let bytes = Self::ensure_ok(response).await?.bytes().await?;
        let parsed: ObfuscateResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed.code)
    }

    // ---- private helpers ----

    /// Pass the response through when its status is exactly 200, otherwise
    /// return [`ObfuscatorApiError::ApiError`] with the body text.
    async fn ensure_ok(response: reqwest::Response) -> Result<reqwest::Response, ObfuscatorApiError> {
        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ObfuscatorApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
