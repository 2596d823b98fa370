//! Narrative Section Types
//!
//! A section file is a JSON object mapping phrase identifiers to objects that
//! map language names to translated text.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Language name to translated text. Values are not type-checked.
pub type PhraseTranslations = Map<String, Value>;

/// A single phrase and its translations
#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    pub id: String,
    pub translations: PhraseTranslations,
}

impl Phrase {
    pub fn has_translation(&self, language: &str) -> bool {
        self.translations.contains_key(language)
    }
}

/// Parsed section file, phrases kept in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NarrativeSection {
    phrases: Vec<Phrase>,
}

/// Reasons a section file could not be decoded
#[derive(Debug)]
pub enum SectionError {
    /// Not JSON, or the top level is not an object
    Json(serde_json::Error),
    /// A phrase maps to something other than a language object
    PhraseNotObject { phrase: String, found: &'static str },
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::Json(e) => write!(f, "{}", e),
            SectionError::PhraseNotObject { phrase, found } => {
                write!(
                    f,
                    "phrase \"{}\" maps to {}, expected an object",
                    phrase, found
                )
            }
        }
    }
}

impl std::error::Error for SectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SectionError::Json(e) => Some(e),
            SectionError::PhraseNotObject { .. } => None,
        }
    }
}

impl NarrativeSection {
    /// Decode a section from raw file contents
    pub fn parse(bytes: &[u8]) -> Result<Self, SectionError> {
        let raw: Map<String, Value> = serde_json::from_slice(bytes).map_err(SectionError::Json)?;

        let phrases = raw
            .into_iter()
            .map(|(id, value)| match value {
                Value::Object(translations) => Ok(Phrase { id, translations }),
                other => Err(SectionError::PhraseNotObject {
                    phrase: id,
                    found: json_type_name(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { phrases })
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn get(&self, id: &str) -> Option<&Phrase> {
        self.phrases.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl FromStr for NarrativeSection {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
