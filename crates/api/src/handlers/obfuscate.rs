//! Handler for `POST /obfuscate`.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use xevic_core::{SubmissionForm, UploadedFile};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /obfuscate
///
/// Accepts a multipart form with an optional `file` upload, optional
/// `script` text and optional `filename`. Responds with the obfuscated (or,
/// when the service is unavailable, original) script as an attachment.
pub async fn obfuscate(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Response> {
    let form = read_form(multipart?).await?;
    let artifact = state.pipeline.handle_submission(form).await?;

    let disposition = HeaderValue::from_bytes(artifact.content_disposition().as_bytes())
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let content_type = HeaderValue::from_str(&format!("{}; charset=utf-8", artifact.media_type))
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok((
        [(CONTENT_TYPE, content_type), (CONTENT_DISPOSITION, disposition)],
        artifact.bytes,
    )
        .into_response())
}

/// Collect the known form fields; unknown fields are ignored.
async fn read_form(mut multipart: Multipart) -> AppResult<SubmissionForm> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                form.file = Some(UploadedFile {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "script" => form.script = Some(field.text().await?),
            "filename" => form.filename = Some(field.text().await?),
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}
