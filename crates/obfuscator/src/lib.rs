//! Client for the luaobfuscator.com REST API.
//!
//! - [`api`] - thin typed wrapper over the two vendor endpoints
//!   (`newscript`, `obfuscate`).
//! - [`client`] - [`ObfuscationClient`], which sequences the two calls and
//!   falls back to the original script on any failure.
//! - [`settings`] - the fixed obfuscation settings sent with every transform.

pub mod api;
pub mod client;
pub mod settings;

pub use api::{LuaObfuscatorApi, ObfuscationSession, ObfuscatorApiError};
pub use client::ObfuscationClient;
pub use settings::ObfuscationSettings;
