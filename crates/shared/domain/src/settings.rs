use crate::config::Configuration;
use crate::constants::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// How invalid field values are treated during ingestion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Invalid values silently fall back to the defaults.
    #[default]
    Lenient,
    /// Invalid values fail the whole ingestion.
    Strict,
}

/// Ingestion policy: the trusted defaults plus the knobs of the sanitizer.
///
/// Loaded from a settings file and environment overrides; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSettings {
    pub defaults: Configuration,
    pub mode: ValidationMode,
    /// Deepest nesting level the reserved-key scan will descend into.
    pub max_depth: usize,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            defaults: Configuration::default(),
            mode: ValidationMode::Lenient,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IngestSettings {
    #[must_use]
    pub fn with_defaults(mut self, defaults: Configuration) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }
}
