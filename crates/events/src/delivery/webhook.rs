//! Webhook notification of original uploads.
//!
//! [`WebhookNotifier`] posts a copy of the unobfuscated script to an
//! external URL as `multipart/form-data`: a `payload_json` field carrying a
//! short message and a `file` field carrying the raw script. Delivery is
//! best-effort. Every failure is logged and absorbed, and there is no retry.

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

/// Statuses the webhook may answer with to count as delivered.
const SUCCESS_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::NO_CONTENT];

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for a single webhook delivery attempt.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook answered with something other than 200 or 204.
    #[error("Webhook returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

/// What happened to a notification. Never an error for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No webhook URL configured.
    Skipped,
    Delivered,
    /// Delivery failed; details were logged.
    Failed,
}

// ---------------------------------------------------------------------------
// WebhookNotifier
// ---------------------------------------------------------------------------

/// Forwards original uploads to the configured webhook.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookNotifier {
    /// Create a notifier sharing the caller's HTTP client (and its pool and
    /// timeout). `url = None` turns every call into a no-op.
    pub fn new(client: reqwest::Client, url: Option<String>) -> Self {
        Self { client, url }
    }

    /// Send `content` under `filename` to the webhook.
    ///
    /// Never fails: a missing URL is logged at debug level, a non-success
    /// status at warn level and a transport error at error level.
    pub async fn notify(&self, filename: &str, content: &str) -> NotifyOutcome {
        let Some(url) = self.url.as_deref() else {
            tracing::debug!("No webhook URL configured; skipping webhook send");
            return NotifyOutcome::Skipped;
        };

        match self.try_send(url, filename, content).await {
            Ok(()) => {
                tracing::debug!(filename, "Original script forwarded to webhook");
                NotifyOutcome::Delivered
            }
            Err(WebhookError::HttpStatus { status, body }) => {
                tracing::warn!(status, body = %body, "Webhook returned non-success status");
                NotifyOutcome::Failed
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to send script to webhook");
                NotifyOutcome::Failed
            }
        }
    }

    /// Execute a single multipart POST and check the response status.
    async fn try_send(&self, url: &str, filename: &str, content: &str) -> Result<(), WebhookError> {
        let payload = serde_json::json!({
            "content": format!("Original script uploaded: `{filename}`"),
        });

        let file = Part::bytes(content.as_bytes().to_vec())
            .file_name(filename.to_string())
            .mime_str("text/plain")?;

        let form = Form::new()
            .text("payload_json", payload.to_string())
            .part("file", file);

        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status();
        if !SUCCESS_STATUSES.contains(&status) {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(WebhookError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
