//! Embedded ArUco marker dictionaries.
//!
//! This crate holds the fixed symbol dictionaries used to generate printable
//! test markers. The downstream marker tracker detects against the same
//! symbol set, so the dictionary it expects is exposed here as a named
//! constant ([`builtins::TRACKER_DICT`]) rather than being restated on each
//! side.
//!
//! It does **not** contain any detection or decoding logic.

pub mod builtins;
mod dictionary;

pub use dictionary::{rotate_code_u64, Dictionary};
