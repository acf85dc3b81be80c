//! Kernel utilities shared by the ingestion crates and the CLI.
//! Keep this crate lightweight: settings loading and the untrusted-payload guards live here.
//!
//! ## Reserved-key scanning
//! ```rust
//! use serde_json::json;
//! use sconf_kernel::security::KeyGuard;
//!
//! let guard = KeyGuard::default();
//! assert!(guard.verify(&json!({ "appearance": "dark" })).is_ok());
//! assert!(guard.verify(&json!({ "__proto__": { "polluted": true } })).is_err());
//! ```
//!
//! ## Settings loading
//! ```rust,ignore
//! use sconf_kernel::config::load_config;
//! use sconf_kernel::domain::settings::IngestSettings;
//!
//! let settings: IngestSettings = load_config(Some("sconf.toml"))?;
//! ```
pub mod config;
pub mod security;

pub use sconf_domain as domain;
