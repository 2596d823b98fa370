//! Raw Narrative Sections
//!
//! Decoding of section files and discovery of which files to check.

pub mod discovery;
pub mod schema;

pub use discovery::{enumerate_files, section_path};
pub use schema::{NarrativeSection, Phrase, PhraseTranslations, SectionError};
