//! Narrative Validator
//!
//! Checks raw narrative JSON files for writers preparing localized text.
//!
//! This library provides:
//! - Section decoding with phrases kept in document order
//! - Translation completeness checks per requested language
//! - Layered configuration and command-line resolution
//! - Text and JSON reporting

pub mod cli;
pub mod config;
pub mod runner;
pub mod section;
pub mod validation;

pub use config::{Config, FileSelector, ValidationRequest};
pub use runner::{RunSummary, run};
pub use section::{NarrativeSection, Phrase, enumerate_files};
pub use validation::{Diagnostic, Severity, ValidationOutcome, validate_file};
