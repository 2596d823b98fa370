//! Validation runs over a set of section files.
//!
//! Every selected file is checked, even after an earlier one fails, and the
//! report is written in the configured format.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::config::{Config, OutputFormat, ValidationRequest};
use crate::section::enumerate_files;
use crate::validation::{Diagnostic, ValidationOutcome, validate_file};

/// Printed when every checked file is valid
pub const SUCCESS_MESSAGE: &str = "No errors detected";

/// Outcomes of a whole run, in the order files were checked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub outcomes: Vec<ValidationOutcome>,
}

impl RunSummary {
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(ValidationOutcome::is_valid)
    }

    pub fn files_checked(&self) -> usize {
        self.outcomes.len()
    }

    pub fn diagnostic_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.diagnostics.len()).sum()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    files: Vec<FileReport<'a>>,
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: &'a Path,
    valid: bool,
    diagnostics: &'a [Diagnostic],
}

/// Check every file the request selects and write the report to `out`
pub fn run<W: Write>(
    config: &Config,
    request: &ValidationRequest,
    out: &mut W,
) -> Result<RunSummary> {
    let files = enumerate_files(&request.selector, &config.raw_dir)?;
    log::debug!(
        "Checking {} file(s) for languages {:?}",
        files.len(),
        request.languages
    );

    let mut summary = RunSummary::default();
    for path in &files {
        let outcome = validate_file(path, &request.languages);

        if config.format == OutputFormat::Text {
            for diagnostic in &outcome.diagnostics {
                writeln!(out, "{}", diagnostic).context("Failed to write report")?;
            }
        }
        summary.outcomes.push(outcome);
    }

    match config.format {
        OutputFormat::Text => {
            if summary.is_valid() {
                writeln!(out, "{}", SUCCESS_MESSAGE).context("Failed to write report")?;
            }
        }
        OutputFormat::Json => write_json_report(out, &summary)?,
    }

    log::info!(
        "Checked {} file(s), found {} problem(s)",
        summary.files_checked(),
        summary.diagnostic_count()
    );
    Ok(summary)
}

fn write_json_report<W: Write>(out: &mut W, summary: &RunSummary) -> Result<()> {
    let report = JsonReport {
        valid: summary.is_valid(),
        files: summary
            .outcomes
            .iter()
            .map(|outcome| FileReport {
                path: &outcome.path,
                valid: outcome.is_valid(),
                diagnostics: &outcome.diagnostics,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write JSON report")?;
    writeln!(out).context("Failed to write report")?;
    Ok(())
}
