//! Facade crate for the `sconf` workspace.
//! Re-exports domain/kernel primitives, the ingestion pipeline and the logger.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use sconf::ingest::Ingestor;
//!
//! let ingested = Ingestor::default().ingest(r#"{"appearance":"dark"}"#)?;
//! assert_eq!(ingested.view.style, "DARK");
//! # Ok::<(), sconf::ingest::IngestError>(())
//! ```

pub use sconf_domain as domain;
pub use sconf_ingest as ingest;
pub use sconf_kernel as kernel;
pub use sconf_logger as logger;

/// Commonly used items in one import.
pub mod prelude {
    pub use sconf_domain::config::{Appearance, Configuration, Locale};
    pub use sconf_domain::settings::{IngestSettings, ValidationMode};
    pub use sconf_domain::view::DerivedView;
    pub use sconf_ingest::{
        IngestError, IngestErrorExt, Ingested, Ingestor, RawInput, SanitizedConfiguration,
        derive_view, parse, parse_slice, sanitize, sanitize_with,
    };
}
