//! Validation Engine
//!
//! Existence, decoding and translation-completeness checks for section files.

pub mod engine;

pub use engine::{Diagnostic, Severity, ValidationOutcome, validate_file, validate_section};
