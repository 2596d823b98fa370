//! Validation Engine
//!
//! Per-file checks: the file must exist, decode as a section, and carry every
//! requested language for every phrase.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::section::NarrativeSection;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found while checking a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    FileNotFound {
        path: PathBuf,
    },
    Unreadable {
        path: PathBuf,
        reason: String,
    },
    MalformedContent {
        path: PathBuf,
        reason: String,
    },
    MissingTranslation {
        file_name: String,
        phrase: String,
        language: String,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::MissingTranslation { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FileNotFound { path } => {
                write!(f, "Error: file {} does not exist", path.display())
            }
            Diagnostic::Unreadable { path, reason } => {
                write!(
                    f,
                    "Error: file {} could not be read: {}",
                    path.display(),
                    reason
                )
            }
            Diagnostic::MalformedContent { path, .. } => write!(
                f,
                "Error: file {} is not a properly-formatted json file",
                path.display()
            ),
            Diagnostic::MissingTranslation {
                file_name,
                phrase,
                language,
            } => write!(
                f,
                "Warning in {}: the phrase \"{}\" is not translated into {}",
                file_name, phrase, language
            ),
        }
    }
}

/// Result of checking one file
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationOutcome {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            diagnostics: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
    }
}

/// Check a single section file.
///
/// A missing, unreadable or undecodable file yields exactly one error and no
/// completeness checks. Otherwise every missing (phrase, language) pair is
/// reported.
pub fn validate_file(path: &Path, languages: &[String]) -> ValidationOutcome {
    log::debug!("Validating {}", path.display());
    let mut outcome = ValidationOutcome::new(path);

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            outcome.diagnostics.push(Diagnostic::FileNotFound {
                path: path.to_path_buf(),
            });
            return outcome;
        }
        Err(e) => {
            outcome.diagnostics.push(Diagnostic::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            return outcome;
        }
    };

    let section = match NarrativeSection::parse(&bytes) {
        Ok(section) => section,
        Err(e) => {
            log::debug!("{} failed to decode: {}", path.display(), e);
            outcome.diagnostics.push(Diagnostic::MalformedContent {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            return outcome;
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    outcome
        .diagnostics
        .extend(validate_section(&file_name, &section, languages));
    outcome
}

/// Report every phrase lacking a requested language, grouped by language
pub fn validate_section(
    file_name: &str,
    section: &NarrativeSection,
    languages: &[String],
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for language in languages {
        for phrase in section.phrases() {
            if !phrase.has_translation(language) {
                diagnostics.push(Diagnostic::MissingTranslation {
                    file_name: file_name.to_string(),
                    phrase: phrase.id.clone(),
                    language: language.clone(),
                });
            }
        }
    }

    diagnostics
}
