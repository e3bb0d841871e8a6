//! Upload → notify → obfuscate → respond orchestration.
//!
//! [`Pipeline`] turns a raw form submission into a downloadable
//! [`OutputArtifact`](xevic_core::OutputArtifact). It owns no long-lived
//! connections: every submission gets its own HTTP client, dropped when
//! the submission completes.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{Pipeline, Processed};
