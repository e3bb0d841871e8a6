use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use xevic_core::CoreError;
use xevic_pipeline::PipelineError;

/// Application-level error type for HTTP handlers.
///
/// Responses are short HTML fragments, since the caller is the upload
/// form. Unlike a hardened API, a 500 carries the underlying message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure surfaced by the submission pipeline.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The multipart body could not be read.
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    /// A bad request with a human-readable message.
    #[error("{0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("{0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Pipeline(PipelineError::Core(CoreError::MissingInput)) => {
                (StatusCode::BAD_REQUEST, CoreError::MissingInput.to_string())
            }
            AppError::Pipeline(err) => {
                tracing::error!(error = ?err, "Error processing submission");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Multipart(err) => {
                tracing::warn!(error = %err, "Malformed multipart body");
                (err.status(), err.body_text())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, Html(error_fragment(&message))).into_response()
    }
}

/// Render an error message as the fragment the upload form displays.
pub fn error_fragment(message: &str) -> String {
    format!("<p style='color:red'>Error: {}</p>", escape_html(message))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_escapes_markup() {
        assert_eq!(
            error_fragment("<b>bad</b> & worse"),
            "<p style='color:red'>Error: &lt;b&gt;bad&lt;/b&gt; &amp; worse</p>"
        );
    }

    #[test]
    fn missing_input_fragment_is_fixed() {
        assert_eq!(
            error_fragment(&CoreError::MissingInput.to_string()),
            "<p style='color:red'>Error: No input provided.</p>"
        );
    }
}
