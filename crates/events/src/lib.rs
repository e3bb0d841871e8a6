//! Outbound notification channels.
//!
//! - [`WebhookNotifier`] - best-effort forwarding of an uploaded script to
//!   a configured webhook (Discord-compatible multipart body).

pub mod delivery;

pub use delivery::webhook::{NotifyOutcome, WebhookError, WebhookNotifier};
