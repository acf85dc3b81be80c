#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! sconf-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining the error enums of the workspace.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Error Kinds**: Generates `kind(&self) -> &'static str` returning `"<Variant>Error"`.
///   The label never includes field values, so it can be shown to untrusted callers.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to results of every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
/// * **`format_context`**: A module-local helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Must be applied to an **enum**.
/// 2. All variants use named fields. Tuple and unit variants are rejected.
/// 3. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[sconf_derive::sconf_error]
/// pub enum IngestError {
///     #[error("Malformed payload{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(payload: &str) -> Result<serde_json::Value, IngestError> {
///     serde_json::from_str(payload).context("Reading request body")
/// }
///
/// assert_eq!(IngestError::from("boom").kind(), "InternalError");
/// ```
#[proc_macro_attribute]
pub fn sconf_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
