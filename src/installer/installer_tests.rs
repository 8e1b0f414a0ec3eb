//! Tests for `add`, the overwrite prompt and report rendering.

use super::*;
use std::cell::Cell;
use std::fs;
use std::io::Cursor;

fn options(dest: &Path, yes: bool) -> AddOptions {
    AddOptions {
        dest: dest.to_path_buf(),
        components_dir: PathBuf::from("src/components"),
        yes,
    }
}

fn never_asked(_: &Path) -> Result<bool, InstallError> {
    panic!("confirmation should not be requested");
}

/// Source whose files cannot be written (a file named like a directory).
struct Conflicting;

impl ComponentSource for Conflicting {
    fn fetch(&self, _: &Component) -> Result<Vec<SourceFile>, InstallError> {
        Ok(vec![
            SourceFile::new("mod.rs", "x"),
            SourceFile::new("mod.rs/inner.rs", "y"),
        ])
    }
}

#[test]
fn add_writes_embedded_files_into_components_dir() {
    let dest = tempfile::tempdir().unwrap();
    let outcome = add("search-bar", &options(dest.path(), false), &EmbeddedSource, never_asked).unwrap();

    let AddOutcome::Installed(report) = outcome else {
        panic!("expected install");
    };
    let target = dest.path().join("src/components/search_bar");
    assert_eq!(report.target, target);
    assert_eq!(report.written.len(), 8);
    assert!(target.join("widget.rs").is_file());
    let module = fs::read_to_string(target.join("mod.rs")).unwrap();
    assert!(module.contains("pub mod widget;"));
}

#[test]
fn add_unknown_component_fails_without_writing() {
    let dest = tempfile::tempdir().unwrap();
    let err = add("carousel", &options(dest.path(), true), &EmbeddedSource, never_asked).unwrap_err();

    assert_eq!(err.to_string(), "Unknown component: carousel");
    assert!(!dest.path().join("src").exists());
}

#[test]
fn existing_target_asks_before_overwriting() {
    let dest = tempfile::tempdir().unwrap();
    let target = dest.path().join("src/components/timeline");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("state.rs"), "local edits").unwrap();

    let asked = Cell::new(false);
    let outcome = add("timeline", &options(dest.path(), false), &EmbeddedSource, |path| {
        asked.set(true);
        assert_eq!(path, target.as_path());
        Ok(false)
    })
    .unwrap();

    assert!(asked.get());
    assert_eq!(outcome, AddOutcome::Declined { target: target.clone() });
    assert_eq!(fs::read_to_string(target.join("state.rs")).unwrap(), "local edits");
}

#[test]
fn confirmed_overwrite_replaces_files() {
    let dest = tempfile::tempdir().unwrap();
    let target = dest.path().join("src/components/timeline");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("state.rs"), "local edits").unwrap();

    let outcome = add("timeline", &options(dest.path(), false), &EmbeddedSource, |_| Ok(true)).unwrap();

    assert!(matches!(outcome, AddOutcome::Installed(_)));
    assert_ne!(fs::read_to_string(target.join("state.rs")).unwrap(), "local edits");
}

#[test]
fn yes_skips_confirmation() {
    let dest = tempfile::tempdir().unwrap();
    fs::create_dir_all(dest.path().join("src/components/timeline")).unwrap();

    let outcome = add("timeline", &options(dest.path(), true), &EmbeddedSource, never_asked).unwrap();
    assert!(matches!(outcome, AddOutcome::Installed(_)));
}

#[test]
fn prompt_errors_propagate() {
    let dest = tempfile::tempdir().unwrap();
    fs::create_dir_all(dest.path().join("src/components/timeline")).unwrap();

    let err = add("timeline", &options(dest.path(), false), &EmbeddedSource, |_| {
        Err(InstallError::Prompt(std::io::Error::other("stdin closed")))
    })
    .unwrap_err();
    assert!(matches!(err, InstallError::Prompt(_)));
}

#[test]
fn add_from_directory_source() {
    let src = tempfile::tempdir().unwrap();
    fs::create_dir_all(src.path().join("timeline")).unwrap();
    fs::write(src.path().join("timeline/mod.rs"), "// custom").unwrap();
    let dest = tempfile::tempdir().unwrap();

    let outcome = add(
        "timeline",
        &options(dest.path(), false),
        &DirectorySource::new(src.path()),
        never_asked,
    )
    .unwrap();

    let AddOutcome::Installed(report) = outcome else {
        panic!("expected install");
    };
    assert_eq!(report.written.len(), 1);
    assert_eq!(
        fs::read_to_string(dest.path().join("src/components/timeline/mod.rs")).unwrap(),
        "// custom"
    );
}

#[test]
fn missing_directory_source_is_an_error() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let err = add(
        "search-bar",
        &options(dest.path(), true),
        &DirectorySource::new(src.path()),
        never_asked,
    )
    .unwrap_err();
    assert!(matches!(err, InstallError::MissingSource(_)));
}

#[test]
fn write_failure_reports_path() {
    let dest = tempfile::tempdir().unwrap();
    let err = add("timeline", &options(dest.path(), true), &Conflicting, never_asked).unwrap_err();
    assert!(
        matches!(&err, InstallError::Write { path, .. } if path.ends_with("mod.rs")),
        "got {err:?}"
    );
}

#[test]
fn prompt_accepts_yes_variants() {
    for answer in ["y\n", "Y\n", "yes\n", " YES \n"] {
        let mut input = Cursor::new(answer);
        let mut output = Vec::new();
        assert!(prompt_overwrite(&mut input, &mut output, Path::new("dir")).unwrap(), "{answer:?}");
    }
}

#[test]
fn prompt_declines_by_default() {
    for answer in ["\n", "n\n", "nope\n", ""] {
        let mut input = Cursor::new(answer);
        let mut output = Vec::new();
        assert!(!prompt_overwrite(&mut input, &mut output, Path::new("dir")).unwrap(), "{answer:?}");
    }
}

#[test]
fn prompt_names_the_target() {
    let mut input = Cursor::new("n\n");
    let mut output = Vec::new();
    prompt_overwrite(&mut input, &mut output, Path::new("src/components/timeline")).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "src/components/timeline already exists. Overwrite? [y/N] "
    );
}

#[test]
fn report_lists_dependencies_and_import() {
    let report = InstallReport {
        component: lookup("search-bar").unwrap(),
        target: PathBuf::from("app/src/components/search_bar"),
        written: Vec::new(),
    };
    insta::assert_snapshot!(render_report(&report, false), @r#"
    ✔ Successfully installed SearchBar into app/src/components/search_bar

    Add to [dependencies] in Cargo.toml:
      ratatui = "0.29"
      serde = { version = "1", features = ["derive"] }
      tracing = "0.1"
      unicode-width = "0.2"

    Import the component like this:
      use crate::components::search_bar::{SearchBar, SearchBarWidget};
    "#);
}

#[test]
fn colored_report_contains_ansi_codes() {
    let report = InstallReport {
        component: lookup("timeline").unwrap(),
        target: PathBuf::from("x"),
        written: Vec::new(),
    };
    assert!(render_report(&report, true).contains("\u{1b}["));
    assert!(!render_report(&report, false).contains("\u{1b}["));
}

#[test]
fn list_shows_every_component() {
    insta::assert_snapshot!(render_list(false), @r"
    search-bar  SearchBar  (ratatui, serde, tracing, unicode-width)
    timeline    Timeline  (ratatui, serde, tracing, unicode-width)
    ");
}
