//! Guards applied to untrusted input before any of it is trusted.

pub mod keys;

pub use keys::{KeyGuard, KeyGuardError, RESERVED_KEYS};
