//! Field names and fixed values of the configuration record.

pub const APPEARANCE: &str = "appearance";
pub const LOCALE: &str = "locale";
pub const VERSION: &str = "version";

/// Keys recognised on a [`Configuration`](crate::config::Configuration); anything else is ignored.
pub const CONFIG_FIELDS: &[&str] = &[APPEARANCE, LOCALE, VERSION];

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_VERSION: f64 = 1.0;

/// Nesting bound applied when scanning untrusted payloads.
pub const DEFAULT_MAX_DEPTH: usize = 32;
