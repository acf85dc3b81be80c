use crate::sanitize::SanitizedConfiguration;
use sconf_domain::view::DerivedView;

/// Computes the display projection of a sanitized configuration.
///
/// Total: the input type already guarantees a known appearance and a well-formed locale.
#[must_use]
pub fn derive_view(config: &SanitizedConfiguration) -> DerivedView {
    DerivedView {
        style: config.appearance.as_str().to_ascii_uppercase(),
        code: config.locale.language().to_owned(),
    }
}
