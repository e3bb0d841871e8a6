//! Domain types for the xevic obfuscator front end.
//!
//! Everything here is request-scoped and free of I/O: resolving a form
//! submission into a [`Submission`], the tagged [`ObfuscationOutcome`]
//! returned by the obfuscation client, and the downloadable
//! [`OutputArtifact`] handed back to the HTTP layer.

pub mod artifact;
pub mod error;
pub mod naming;
pub mod obfuscation;
pub mod submission;

pub use artifact::OutputArtifact;
pub use error::CoreError;
pub use obfuscation::{DegradedReason, ObfuscationOutcome};
pub use submission::{Submission, SubmissionForm, UploadedFile};
