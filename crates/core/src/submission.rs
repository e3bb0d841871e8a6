//! Resolution of raw form input into a single [`Submission`].
//!
//! The form carries an optional uploaded file, optional pasted text and an
//! optional requested output name. Exactly one content source is used: an
//! uploaded file takes precedence over pasted text.

use crate::error::CoreError;

/// Source name used for pasted text.
pub const PASTED_SOURCE_NAME: &str = "pasted_script.lua";

/// Source name used for an upload that arrived without a file name.
pub const UNNAMED_UPLOAD_NAME: &str = "uploaded_script.lua";

/// A file part as received from the transport layer.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    /// Client-supplied file name, if any.
    pub file_name: Option<String>,
    /// Raw uploaded bytes.
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// A browser submits an empty, unnamed file part when no file was picked.
    fn is_blank(&self) -> bool {
        self.bytes.is_empty() && self.file_name.as_deref().map_or(true, str::is_empty)
    }
}

/// Raw form fields before validation.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub file: Option<UploadedFile>,
    pub script: Option<String>,
    pub filename: Option<String>,
}

/// A validated script submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Name of the original script (upload name or [`PASTED_SOURCE_NAME`]).
    pub source_name: String,
    /// Script text. Undecodable upload bytes are replaced, never rejected.
    pub content: String,
    /// Output name requested by the client, if any.
    pub requested_output_name: Option<String>,
}

impl Submission {
    /// Resolve a form into a submission.
    ///
    /// Returns [`CoreError::MissingInput`] when neither a file nor
    /// non-empty pasted text is present.
    pub fn from_form(form: SubmissionForm) -> Result<Self, CoreError> {
        let requested_output_name = form.filename.filter(|name| !name.is_empty());

        if let Some(file) = form.file.filter(|f| !f.is_blank()) {
            let source_name = file
                .file_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNNAMED_UPLOAD_NAME.to_string());
            let content = String::from_utf8_lossy(&file.bytes).into_owned();
            return Ok(Self {
                source_name,
                content,
                requested_output_name,
            });
        }

        match form.script.filter(|text| !text.is_empty()) {
            Some(content) => Ok(Self {
                source_name: PASTED_SOURCE_NAME.to_string(),
                content,
                requested_output_name,
            }),
            None => Err(CoreError::MissingInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn upload(name: Option<&str>, bytes: &[u8]) -> Option<UploadedFile> {
        Some(UploadedFile {
            file_name: name.map(str::to_string),
            bytes: bytes.to_vec(),
        })
    }

    #[test]
    fn empty_form_is_missing_input() {
        let result = Submission::from_form(SubmissionForm::default());
        assert_matches!(result, Err(CoreError::MissingInput));
    }

    #[test]
    fn empty_script_counts_as_absent() {
        let form = SubmissionForm {
            script: Some(String::new()),
            ..Default::default()
        };
        assert_matches!(Submission::from_form(form), Err(CoreError::MissingInput));
    }

    #[test]
    fn blank_file_part_counts_as_absent() {
        let form = SubmissionForm {
            file: upload(Some(""), b""),
            script: Some("x=1".into()),
            ..Default::default()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.source_name, PASTED_SOURCE_NAME);
        assert_eq!(submission.content, "x=1");
    }

    #[test]
    fn pasted_text_uses_default_source_name() {
        let form = SubmissionForm {
            script: Some("x=1".into()),
            filename: Some("out".into()),
            ..Default::default()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.source_name, "pasted_script.lua");
        assert_eq!(submission.requested_output_name.as_deref(), Some("out"));
    }

    #[test]
    fn file_takes_precedence_over_script() {
        let form = SubmissionForm {
            file: upload(Some("test.lua"), b"print(\"hi\")"),
            script: Some("ignored".into()),
            filename: None,
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.source_name, "test.lua");
        assert_eq!(submission.content, "print(\"hi\")");
    }

    #[test]
    fn unnamed_upload_gets_fallback_name() {
        let form = SubmissionForm {
            file: upload(None, b"return 1"),
            ..Default::default()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.source_name, UNNAMED_UPLOAD_NAME);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let form = SubmissionForm {
            file: upload(Some("bin.lua"), &[b'a', 0xff, b'b']),
            ..Default::default()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.content, "a\u{FFFD}b");
    }

    #[test]
    fn empty_requested_name_is_ignored() {
        let form = SubmissionForm {
            script: Some("x=1".into()),
            filename: Some(String::new()),
            ..Default::default()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.requested_output_name, None);
    }
}
