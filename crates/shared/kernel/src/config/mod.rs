use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "SCONF";
/// File looked up when no explicit settings path is given (extension is probed).
pub const DEFAULT_SETTINGS_FILE: &str = "sconf";

/// Custom error type for settings loading.
#[sconf_derive::sconf_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable settings loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Base File**: `path`, or `sconf.{toml,json,yaml,...}` in the working directory.
///    The format follows the file extension.
/// 2. **Environment Overrides**: variables prefixed with `SCONF__`. Nested fields use
///    double underscores, e.g. `SCONF__DEFAULTS__LOCALE=id-ID` maps to `defaults.locale`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, cannot be parsed, or the
/// merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use sconf_kernel::config::load_config;
/// use sconf_kernel::domain::settings::IngestSettings;
///
/// let settings: IngestSettings = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading settings from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(config)
}

/// Same as [`load_config`], but falls back to `T::default()` overlaid with environment
/// overrides when no settings file exists.
///
/// # Errors
/// Returns [`ConfigError::Config`] if a present file is malformed or the merged values
/// do not deserialize into `T`.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + serde::Serialize + Default,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), |p| p.as_ref().to_path_buf());

    let defaults = Config::try_from(&T::default()).context("Failed to encode default settings")?;

    let config = Config::builder()
        .add_source(defaults)
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(config)
}
