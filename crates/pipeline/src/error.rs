use xevic_core::CoreError;

/// Failures that reach the transport boundary.
///
/// Notification and obfuscation failures never appear here: they are
/// absorbed into [`NotifyOutcome`](xevic_events::NotifyOutcome) and
/// [`ObfuscationOutcome`](xevic_core::ObfuscationOutcome).
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The per-submission HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
