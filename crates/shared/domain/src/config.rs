use crate::constants::{CONFIG_FIELDS, DARK, DEFAULT_LOCALE, DEFAULT_VERSION, LIGHT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display configuration accepted from untrusted callers.
///
/// Every field is a checked type, so a `Configuration` cannot hold an unknown
/// appearance or a malformed locale, and there is no way to attach extra keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    pub appearance: Appearance,
    pub locale: Locale,
    /// Informational only.
    pub version: f64,
}

impl Configuration {
    /// Returns `true` if `key` names one of the record's fields.
    #[must_use]
    pub fn has_field(key: &str) -> bool {
        CONFIG_FIELDS.contains(&key)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self { appearance: Appearance::Light, locale: Locale::default(), version: DEFAULT_VERSION }
    }
}

/// Colour scheme of the UI.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

impl FromStr for Appearance {
    type Err = InvalidValue;

    /// Case-insensitive: `"DARK"` and `"Dark"` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            LIGHT => Ok(Self::Light),
            DARK => Ok(Self::Dark),
            _ => Err(InvalidValue::Appearance),
        }
    }
}

impl TryFrom<String> for Appearance {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Appearance> for String {
    fn from(value: Appearance) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language and region tag in the `ll-RR` form, e.g. `en-US` or `id-ID`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Validates `tag` against the `ll-RR` shape: two lowercase ASCII letters,
    /// a hyphen, two uppercase ASCII letters. No case folding is applied.
    ///
    /// # Errors
    /// Returns [`InvalidValue::Locale`] if the tag has any other shape.
    pub fn parse(tag: &str) -> Result<Self, InvalidValue> {
        match tag.as_bytes() {
            [l1, l2, b'-', r1, r2]
                if l1.is_ascii_lowercase()
                    && l2.is_ascii_lowercase()
                    && r1.is_ascii_uppercase()
                    && r2.is_ascii_uppercase() =>
            {
                Ok(Self(tag.to_owned()))
            },
            _ => Err(InvalidValue::Locale),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-letter language subtag (`"id"` for `id-ID`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.get(..2).unwrap_or_default()
    }

    /// The two-letter region subtag (`"ID"` for `id-ID`).
    #[must_use]
    pub fn region(&self) -> &str {
        self.0.get(3..).unwrap_or_default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_owned())
    }
}

impl FromStr for Locale {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value rejected by one of the checked configuration types.
///
/// The rejected input itself is deliberately not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidValue {
    Appearance,
    Locale,
}

impl InvalidValue {
    /// Name of the configuration field the value was meant for.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Appearance => crate::constants::APPEARANCE,
            Self::Locale => crate::constants::LOCALE,
        }
    }
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Appearance => write!(f, "appearance must be one of '{LIGHT}' or '{DARK}'"),
            Self::Locale => f.write_str("locale must look like 'en-US'"),
        }
    }
}

impl std::error::Error for InvalidValue {}
