//! # Domain Models
//!
//! This crate contains the pure configuration types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or heavy logic. Only data and the checks that make
//! an invalid value unrepresentable.

pub mod config;
pub mod constants;
pub mod settings;
pub mod view;
