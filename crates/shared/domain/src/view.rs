use serde::Serialize;

/// Read-only display projection of a configuration.
///
/// It has no lifecycle of its own and is recomputed whenever it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedView {
    /// Upper-cased appearance label, e.g. `DARK`.
    pub style: String,
    /// Two-letter language code taken from the locale, e.g. `id`.
    pub code: String,
}
