//! End-to-end validation scenarios through the library API
use std::fs;
use std::path::Path;

use narrative_validator::config::{Config, FileSelector, ValidationRequest};
use narrative_validator::runner::run;

fn write_section(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(format!("{}.json", name)), content).expect("write section");
}

fn config_for(raw_dir: &Path) -> Config {
    Config {
        raw_dir: raw_dir.to_path_buf(),
        ..Config::default()
    }
}

fn request(args: &[&str], config: &Config) -> ValidationRequest {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    ValidationRequest::from_positionals(&args, &config.official_languages)
}

fn run_to_string(config: &Config, request: &ValidationRequest) -> (bool, String) {
    let mut out = Vec::new();
    let summary = run(config, request, &mut out).expect("run validator");
    let output = String::from_utf8(out).expect("utf-8 output");
    (summary.is_valid(), output)
}

#[test]
fn test_complete_file_passes() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_section(dir.path(), "section_1", r#"{"hello": {"english": "hi"}}"#);
    let config = config_for(dir.path());

    let (valid, output) = run_to_string(&config, &request(&["section_1", "english"], &config));
    assert!(valid);
    assert_eq!(output, "No errors detected\n");
}

#[test]
fn test_missing_language_warns() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_section(dir.path(), "section_1", r#"{"hello": {"english": "hi"}}"#);
    let config = config_for(dir.path());

    let (valid, output) = run_to_string(
        &config,
        &request(&["section_1", "english", "spanish"], &config),
    );
    assert!(!valid);
    assert_eq!(
        output,
        "Warning in section_1.json: the phrase \"hello\" is not translated into spanish\n"
    );
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_for(dir.path());

    let (valid, output) = run_to_string(&config, &request(&["missing_file"], &config));
    assert!(!valid);
    assert_eq!(
        output,
        format!(
            "Error: file {} does not exist\n",
            dir.path().join("missing_file.json").display()
        )
    );
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_section(dir.path(), "section_1", "not valid json");
    let config = config_for(dir.path());

    let (valid, output) = run_to_string(&config, &request(&["section_1"], &config));
    assert!(!valid);
    assert_eq!(
        output,
        format!(
            "Error: file {} is not a properly-formatted json file\n",
            dir.path().join("section_1.json").display()
        )
    );
}

#[test]
fn test_all_reports_only_failing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_section(dir.path(), "section_1", r#"{"hello": {"english": "hi"}}"#);
    write_section(dir.path(), "section_2", r#"{"bye": {"spanish": "adios"}}"#);
    let config = config_for(dir.path());

    let (valid, output) = run_to_string(&config, &request(&["all"], &config));
    assert!(!valid);
    assert_eq!(
        output,
        "Warning in section_2.json: the phrase \"bye\" is not translated into english\n"
    );
}

#[test]
fn test_all_keeps_checking_after_failures() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_section(dir.path(), "a", "{ broken");
    write_section(dir.path(), "b", r#"{"x": {}, "y": {}}"#);
    let config = config_for(dir.path());

    let mut out = Vec::new();
    let summary = run(&config, &request(&[], &config), &mut out).expect("run validator");
    assert_eq!(summary.files_checked(), 2);
    assert_eq!(summary.diagnostic_count(), 3);

    let output = String::from_utf8(out).expect("utf-8 output");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("is not a properly-formatted json file"));
    assert_eq!(
        lines[1],
        "Warning in b.json: the phrase \"x\" is not translated into english"
    );
    assert_eq!(
        lines[2],
        "Warning in b.json: the phrase \"y\" is not translated into english"
    );
}

#[test]
fn test_rerun_is_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_section(
        dir.path(),
        "section_1",
        r#"{"a": {}, "b": {"english": "b"}}"#,
    );
    write_section(dir.path(), "section_2", "[]");
    let config = config_for(dir.path());
    let request = ValidationRequest {
        selector: FileSelector::All,
        languages: vec!["english".to_string(), "french".to_string()],
    };

    let first = run_to_string(&config, &request);
    let second = run_to_string(&config, &request);
    assert_eq!(first, second);
}
