#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No input provided.")]
    MissingInput,

    #[error("Internal error: {0}")]
    Internal(String),
}
