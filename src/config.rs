//! Configuration management for the narrative validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Layered config files (built-in < user-global < project < command line)
//! - Resolving positional arguments into a validation request

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding raw narrative files, relative to the working directory
pub const RAW_NARRATIVE_DIR: &str = "raw";

/// Languages every phrase must be translated into unless others are requested
pub const OFFICIAL_LANGUAGES: &[&str] = &["english"];

/// Selector that expands to every file in the raw narrative directory
pub const ALL_FILES: &str = "all";

/// Project config file picked up from the working directory
pub const PROJECT_CONFIG_FILE: &str = ".narrative.toml";

/// Command-line arguments for the narrative validator
#[derive(Debug, Parser)]
#[command(name = "narrative-validate")]
#[command(about = "Check raw narrative files for JSON errors and missing translations")]
#[command(version)]
pub struct Args {
    /// File name to check (no path or extension, or `all`), then any languages to require.
    /// Everything from the first positional on is taken verbatim, even if it starts with `-`.
    #[arg(
        value_name = "FILE [LANGUAGE]...",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub targets: Vec<String>,

    /// Directory containing the raw narrative JSON files
    #[arg(long, help = "Directory containing raw narrative files (default: raw)")]
    pub raw_dir: Option<PathBuf>,

    /// Project config file to load instead of ./.narrative.toml
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Skip the user-global config file
    #[arg(long, help = "Ignore the user-global config file")]
    pub no_user_config: bool,

    /// Output format for the report
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log level for diagnostics written to stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per problem, plus a success message when there are none
    #[default]
    Text,
    /// A single JSON document describing every checked file
    Json,
}

/// On-disk config file (user-global or project)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub raw_dir: Option<PathBuf>,
    pub official_languages: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory the file selector resolves against
    pub raw_dir: PathBuf,
    /// Languages checked when none are given on the command line
    pub official_languages: Vec<String>,
    /// Positional arguments, resolved later by [`Config::request`]
    pub targets: Vec<String>,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config files that were applied, in order
    pub sources: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from(RAW_NARRATIVE_DIR),
            official_languages: OFFICIAL_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            targets: Vec::new(),
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
            sources: Vec::new(),
        }
    }
}

impl Config {
    /// Create configuration from parsed arguments, discovering config files
    pub fn from_args(args: Args) -> Result<Self> {
        let user_config = if args.no_user_config {
            None
        } else {
            user_config_path()
        };
        Self::from_sources(
            args,
            user_config.as_deref(),
            Path::new(PROJECT_CONFIG_FILE),
        )
    }

    /// Layer the given config locations under the command-line arguments.
    ///
    /// Discovered files that don't exist are skipped; a file named with
    /// `--config` must exist.
    pub fn from_sources(
        args: Args,
        user_config: Option<&Path>,
        project_config: &Path,
    ) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = user_config.filter(|p| p.is_file()) {
            config.apply_file(path)?;
        }

        match &args.config {
            Some(path) => config.apply_file(path)?,
            None if project_config.is_file() => config.apply_file(project_config)?,
            None => {}
        }

        if let Some(raw_dir) = args.raw_dir {
            config.raw_dir = raw_dir;
        }
        config.targets = args.targets;
        config.format = args.format;
        config.log_level = args.log_level;

        if config.official_languages.is_empty() {
            bail!("official_languages must name at least one language");
        }

        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let file = ConfigFile::load(path)?;
        log::debug!("Loaded config file {}", path.display());

        if let Some(raw_dir) = file.raw_dir {
            self.raw_dir = raw_dir;
        }
        if let Some(languages) = file.official_languages {
            self.official_languages = languages;
        }
        self.sources.push(path.to_path_buf());
        Ok(())
    }

    /// Resolve the positional arguments against the official languages
    pub fn request(&self) -> ValidationRequest {
        ValidationRequest::from_positionals(&self.targets, &self.official_languages)
    }
}

/// `<config_dir>/narrative-validator/config.toml` for the current platform
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("narrative-validator").join("config.toml"))
}

/// Which raw files a run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelector {
    All,
    Named(String),
}

impl FileSelector {
    pub fn parse(value: &str) -> Self {
        if value == ALL_FILES {
            FileSelector::All
        } else {
            FileSelector::Named(value.to_string())
        }
    }
}

/// Files to check and the languages each phrase must have
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub selector: FileSelector,
    pub languages: Vec<String>,
}

impl ValidationRequest {
    /// Resolve positional arguments.
    ///
    /// No arguments checks every file, one names the file, and anything after
    /// the file replaces the official languages verbatim. Language names are
    /// not checked against the official list.
    pub fn from_positionals(args: &[String], official_languages: &[String]) -> Self {
        match args {
            [] => Self {
                selector: FileSelector::All,
                languages: official_languages.to_vec(),
            },
            [file] => Self {
                selector: FileSelector::parse(file),
                languages: official_languages.to_vec(),
            },
            [file, languages @ ..] => Self {
                selector: FileSelector::parse(file),
                languages: languages.to_vec(),
            },
        }
    }
}
