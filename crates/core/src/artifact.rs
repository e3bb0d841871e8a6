//! The downloadable file produced for a submission.

use crate::naming::output_filename;
use crate::obfuscation::ObfuscationOutcome;
use crate::submission::Submission;

/// Media type of every artifact.
pub const MEDIA_TYPE: &str = "text/plain";

/// A file ready to be streamed back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
}

impl OutputArtifact {
    /// Package an outcome for download, naming it after the submission.
    pub fn from_outcome(submission: &Submission, outcome: ObfuscationOutcome) -> Self {
        let filename = output_filename(
            &submission.source_name,
            submission.requested_output_name.as_deref(),
        );
        Self {
            filename,
            bytes: outcome.into_code().into_bytes(),
            media_type: MEDIA_TYPE,
        }
    }

    /// `Content-Disposition` header value for this artifact.
    ///
    /// Quotes and backslashes are escaped and control characters dropped,
    /// so the value is always a legal header.
    pub fn content_disposition(&self) -> String {
        let mut escaped = String::with_capacity(self.filename.len());
        for ch in self.filename.chars().filter(|c| !c.is_control()) {
            if ch == '"' || ch == '\\' {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        format!("attachment; filename=\"{escaped}\"")
    }
}
