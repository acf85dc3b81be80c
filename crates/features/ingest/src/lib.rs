//! # Config Ingestion
//!
//! Safe ingestion of untrusted configuration payloads. The pipeline is three pure steps:
//!
//! 1. [`parse`]: JSON text to an untrusted [`RawInput`], or [`IngestError::Parse`].
//! 2. [`sanitize`]: reserved-key rejection, then an allowlist copy of the known fields onto
//!    a fresh copy of the caller's defaults, then field validation. Fails with
//!    [`IngestError::Pollution`] (or [`IngestError::Validation`] in strict mode).
//! 3. [`derive_view`]: the read-only display projection.
//!
//! Nothing here holds state, so every function can be called from any number of threads
//! at once. Errors are terminal for the payload at hand; retrying malformed input is pointless.
//!
//! ## Example
//!
//! ```rust
//! use sconf_ingest::{derive_view, parse, sanitize};
//! use sconf_ingest::domain::config::Configuration;
//!
//! let raw = parse(r#"{"appearance":"dark","locale":"id-ID"}"#)?;
//! let config = sanitize(&raw, &Configuration::default())?;
//! let view = derive_view(&config);
//!
//! assert_eq!(view.style, "DARK");
//! assert_eq!(view.code, "id");
//! # Ok::<(), sconf_ingest::IngestError>(())
//! ```

mod error;
pub mod raw;
pub mod sanitize;
pub mod view;

pub use crate::error::{IngestError, IngestErrorExt};
pub use crate::raw::{RawInput, parse, parse_slice};
pub use crate::sanitize::{SanitizedConfiguration, sanitize, sanitize_with};
pub use crate::view::derive_view;
pub use sconf_domain as domain;

use sconf_domain::settings::IngestSettings;
use sconf_domain::view::DerivedView;
use serde::Serialize;
use tracing::instrument;

/// Result of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingested {
    pub config: SanitizedConfiguration,
    pub view: DerivedView,
}

/// Runs the whole pipeline with a fixed [`IngestSettings`].
///
/// Cheap to clone and safe to share: it only holds the immutable settings.
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    settings: IngestSettings,
}

impl Ingestor {
    #[must_use]
    pub const fn new(settings: IngestSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &IngestSettings {
        &self.settings
    }

    /// `parse -> sanitize -> derive_view` on one payload.
    ///
    /// # Errors
    /// * [`IngestError::Parse`] if the payload is not valid JSON; sanitization is skipped.
    /// * [`IngestError::Pollution`] if the payload is not a plain object or carries a
    ///   reserved key.
    /// * [`IngestError::Validation`] for invalid fields in strict mode.
    #[instrument(skip_all, fields(mode = ?self.settings.mode, bytes = payload.len()))]
    pub fn ingest(&self, payload: &str) -> Result<Ingested, IngestError> {
        self.finish(&parse(payload)?)
    }

    /// Same as [`Ingestor::ingest`] for a payload read as raw bytes.
    ///
    /// # Errors
    /// As [`Ingestor::ingest`]; bytes that are not valid UTF-8 are an [`IngestError::Parse`].
    #[instrument(skip_all, fields(mode = ?self.settings.mode, bytes = payload.len()))]
    pub fn ingest_bytes(&self, payload: &[u8]) -> Result<Ingested, IngestError> {
        self.finish(&parse_slice(payload)?)
    }

    fn finish(&self, raw: &RawInput) -> Result<Ingested, IngestError> {
        let config = sanitize_with(raw, &self.settings)?;
        let view = derive_view(&config);

        Ok(Ingested { config, view })
    }
}
