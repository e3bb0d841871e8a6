//! Tagged result of an obfuscation attempt.
//!
//! A degraded outcome still carries usable code (the original script), so
//! the transport layer answers identically in both cases. The tag exists
//! for logging and tests.

use std::fmt;

/// Why the remote transform did not produce obfuscated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradedReason {
    /// No API key configured.
    Unconfigured,
    /// The session-creation call returned a non-200 status.
    SessionRejected { status: u16 },
    /// The session-creation response had no session identifier.
    MissingSessionId,
    /// The transform call returned a non-200 status.
    TransformRejected { status: u16 },
    /// The transform response had no code field.
    MissingCode,
    /// Network, timeout or decoding failure.
    Transport(String),
    /// The submission's outbound time budget ran out before the exchange finished.
    BudgetExceeded,
}

impl fmt::Display for DegradedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconfigured => write!(f, "obfuscation API key not configured"),
            Self::SessionRejected { status } => write!(f, "session creation returned HTTP {status}"),
            Self::MissingSessionId => write!(f, "session creation returned no session id"),
            Self::TransformRejected { status } => write!(f, "obfuscate call returned HTTP {status}"),
            Self::MissingCode => write!(f, "obfuscate response carried no code"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::BudgetExceeded => write!(f, "outbound time budget exceeded"),
        }
    }
}

/// Outcome of an obfuscation attempt: either transformed code, or the
/// original script returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObfuscationOutcome {
    /// The remote service returned transformed code.
    Obfuscated(String),
    /// The original script, returned because the transform failed.
    Degraded { code: String, reason: DegradedReason },
}

impl ObfuscationOutcome {
    pub fn degraded(original: impl Into<String>, reason: DegradedReason) -> Self {
        Self::Degraded {
            code: original.into(),
            reason,
        }
    }

    /// The code to deliver, regardless of outcome.
    pub fn code(&self) -> &str {
        match self {
            Self::Obfuscated(code) | Self::Degraded { code, .. } => code,
        }
    }

    pub fn into_code(self) -> String {
        match self {
            Self::Obfuscated(code) | Self::Degraded { code, .. } => code,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn degraded_reason(&self) -> Option<&DegradedReason> {
        match self {
            Self::Obfuscated(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }
}
