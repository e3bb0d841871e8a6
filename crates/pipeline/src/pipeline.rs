//! The submission pipeline.
//!
//! Steps, strictly sequential:
//!
//! 1. Resolve the form into a [`Submission`] (file wins over pasted text).
//! 2. Build a per-submission HTTP client. The outbound timeout is one
//!    deadline shared by every call below, not a per-call allowance.
//! 3. Forward the original script to the webhook (outcome ignored).
//! 4. Obfuscate, falling back to the original script.
//! 5. Package the code as an [`OutputArtifact`] with the derived filename.

use std::sync::Arc;

use tokio::time::{timeout_at, Instant};
use xevic_core::{DegradedReason, ObfuscationOutcome, OutputArtifact, Submission, SubmissionForm};
use xevic_events::{NotifyOutcome, WebhookNotifier};
use xevic_obfuscator::ObfuscationClient;

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// Result of running the outbound steps for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub notification: NotifyOutcome,
    pub obfuscation: ObfuscationOutcome,
}

/// Orchestrates notification and obfuscation for each submission.
///
/// Cheap to clone; holds only the shared configuration.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Arc<PipelineConfig>,
}

impl Pipeline {
    pub fn new(config: Arc<PipelineConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Resolve, process and package a form submission.
    ///
    /// Only a missing input or a failure to build the HTTP client is an
    /// error; webhook and obfuscation failures are absorbed.
    pub async fn handle_submission(
        &self,
        form: SubmissionForm,
    ) -> Result<OutputArtifact, PipelineError> {
        let submission = Submission::from_form(form)?;
        let processed = self.process(&submission).await?;
        let artifact = OutputArtifact::from_outcome(&submission, processed.obfuscation);

        tracing::info!(
            source = %submission.source_name,
            output = %artifact.filename,
            bytes = artifact.bytes.len(),
            "Submission processed"
        );
        Ok(artifact)
    }

    /// Notify, then obfuscate, sharing one HTTP client that is dropped
    /// (with its connection pool) when this returns.
    ///
    /// Both steps run against a single deadline of `outbound_timeout`. A
    /// step still running at the deadline is abandoned: the notification
    /// counts as failed and obfuscation degrades to the original script.
    pub async fn process(&self, submission: &Submission) -> Result<Processed, PipelineError> {
        let budget = self.config.outbound_timeout;
        let deadline = Instant::now() + budget;

        let client = reqwest::Client::builder()
            .timeout(self.config.outbound_timeout)
            .build()?;

        let notifier = WebhookNotifier::new(client.clone(), self.config.webhook_url.clone());
        let obfuscator = ObfuscationClient::new(
            client,
            self.config.obfuscator_url.clone(),
            self.config.api_key.clone(),
            self.config.obfuscation_timeout,
        );

        let notification = match timeout_at(
            deadline,
            notifier.notify(&submission.source_name, &submission.content),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(?budget, "Webhook notification exceeded the outbound budget");
                NotifyOutcome::Failed
            }
        };

        let obfuscation = match timeout_at(deadline, obfuscator.obfuscate(&submission.content))
            .await
        {
            Ok(outcome) => outcome,
            Err(_) => ObfuscationOutcome::degraded(
                submission.content.as_str(),
                DegradedReason::BudgetExceeded,
            ),
        };

        if let Some(reason) = obfuscation.degraded_reason() {
            tracing::warn!(
                source = %submission.source_name,
                reason = %reason,
                "Obfuscation degraded; returning original script"
            );
        }

        Ok(Processed {
            notification,
            obfuscation,
        })
    }
}
