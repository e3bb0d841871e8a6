use xevic_pipeline::Pipeline;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Holds no per-request data: each submission builds
/// its own outbound HTTP client inside the pipeline.
#[derive(Clone)]
pub struct AppState {
    /// Submission pipeline (carries the outbound configuration).
    pub pipeline: Pipeline,
}
