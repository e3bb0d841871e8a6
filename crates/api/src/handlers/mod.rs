pub mod index;
pub mod obfuscate;
