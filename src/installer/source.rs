//! Where component files come from.
//!
//! The default source is the widget code compiled into this binary. A
//! directory source reads `<root>/<component>/` instead, for installing
//! locally modified copies.

use super::registry::Component;
use crate::model::InstallError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One file of a component, relative to the component directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path below the component directory.
    pub relative_path: PathBuf,
    /// Raw file contents.
    pub contents: Vec<u8>,
}

impl SourceFile {
    /// Pair a relative path with its contents.
    pub fn new(relative_path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents: contents.into(),
        }
    }
}

/// Provider of a component's file set.
pub trait ComponentSource {
    /// Every file of `component`, paths relative to its install directory.
    fn fetch(&self, component: &Component) -> Result<Vec<SourceFile>, InstallError>;
}

const SEARCH_BAR_MOD: &str = "\
//! Search bar component.

pub mod debounce;
pub mod helpers;
pub mod identifiers;
pub mod state;
pub mod styles;
pub mod suggestion;
pub mod widget;

pub use state::{SearchBar, SearchBarConfig, SearchBarEvent};
pub use styles::{Accent, ColorConfig, Size, Variant};
pub use suggestion::Suggestion;
pub use widget::SearchBarWidget;
";

const TIMELINE_MOD: &str = "\
//! Timeline component.

pub mod helpers;
pub mod identifiers;
pub mod model;
pub mod state;
pub mod styles;
pub mod widget;

pub use model::{TimelineEntry, TimelineNode};
pub use state::{DefaultExpansion, TimelineState as Timeline, TimelineState};
pub use styles::{Accent, ColorConfig, Size, Variant};
pub use widget::TimelineWidget;
";

/// A source file compiled into the binary.
///
/// `imports` lists exact `(from, to)` replacements that turn this crate's
/// module paths into paths between the component's own files.
struct EmbeddedFile {
    path: &'static str,
    source: &'static str,
    imports: &'static [(&'static str, &'static str)],
}

const HELPERS_IMPORT: (&str, &str) = ("use crate::view::helpers::", "use super::helpers::");
const STYLES_IMPORT: (&str, &str) = ("use crate::view::styles::", "use super::styles::");

const fn plain(path: &'static str, source: &'static str) -> EmbeddedFile {
    EmbeddedFile {
        path,
        source,
        imports: &[],
    }
}

const SEARCH_BAR_FILES: &[EmbeddedFile] = &[
    plain("mod.rs", SEARCH_BAR_MOD),
    plain("debounce.rs", include_str!("../state/debounce.rs")),
    plain("helpers.rs", include_str!("../view/helpers.rs")),
    plain("identifiers.rs", include_str!("../model/identifiers.rs")),
    EmbeddedFile {
        path: "state.rs",
        source: include_str!("../state/search_bar.rs"),
        imports: &[
            (
                "use crate::model::{filter_suggestions, InstanceId, Suggestion};",
                "use super::identifiers::InstanceId;\nuse super::suggestion::{filter_suggestions, Suggestion};",
            ),
            ("use crate::state::debounce::Debounce;", "use super::debounce::Debounce;"),
        ],
    },
    plain("styles.rs", include_str!("../view/styles.rs")),
    plain("suggestion.rs", include_str!("../model/suggestion.rs")),
    EmbeddedFile {
        path: "widget.rs",
        source: include_str!("../view/search_bar.rs"),
        imports: &[
            ("use crate::state::SearchBar;", "use super::state::SearchBar;"),
            HELPERS_IMPORT,
            STYLES_IMPORT,
        ],
    },
];

const TIMELINE_FILES: &[EmbeddedFile] = &[
    plain("mod.rs", TIMELINE_MOD),
    plain("helpers.rs", include_str!("../view/helpers.rs")),
    plain("identifiers.rs", include_str!("../model/identifiers.rs")),
    plain("model.rs", include_str!("../model/timeline.rs")),
    EmbeddedFile {
        path: "state.rs",
        source: include_str!("../state/timeline.rs"),
        imports: &[(
            "use crate::model::{NodeId, TimelineEntry, TimelineNode};",
            "use super::identifiers::NodeId;\nuse super::model::{TimelineEntry, TimelineNode};",
        )],
    },
    plain("styles.rs", include_str!("../view/styles.rs")),
    EmbeddedFile {
        path: "widget.rs",
        source: include_str!("../view/timeline.rs"),
        imports: &[
            ("use crate::model::TimelineNode;", "use super::model::TimelineNode;"),
            (
                "use crate::state::{TimelineRow, TimelineState};",
                "use super::state::{TimelineRow, TimelineState};",
            ),
            HELPERS_IMPORT,
            STYLES_IMPORT,
        ],
    },
];

/// Source up to its trailing `#[cfg(test)]` module, which is not shipped.
fn strip_test_module(source: &str) -> &str {
    let mut code = match source.find("\n#[cfg(test)]\n") {
        Some(at) => &source[..at],
        None => source,
    }
    .trim_end();
    // Section banners that introduced the tests go too.
    while let Some((rest, last)) = code.rsplit_once('\n') {
        if !last.trim_start().starts_with("// ") {
            break;
        }
        code = rest.trim_end();
    }
    code
}

impl EmbeddedFile {
    /// The file as installed: tests dropped, imports made component-relative.
    fn vendored(&self) -> String {
        let mut text = strip_test_module(self.source).to_string();
        for &(from, to) in self.imports {
            text = text.replace(from, to);
        }
        text.push('\n');
        text
    }
}

/// Component files compiled into the binary.
///
/// Each component ships its own copies of the shared identifier, style and
/// helper modules so the installed directory builds on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    fn embedded(name: &str) -> Option<&'static [EmbeddedFile]> {
        match name {
            "search-bar" => Some(SEARCH_BAR_FILES),
            "timeline" => Some(TIMELINE_FILES),
            _ => None,
        }
    }
}

impl ComponentSource for EmbeddedSource {
    fn fetch(&self, component: &Component) -> Result<Vec<SourceFile>, InstallError> {
        let files = Self::embedded(component.name)
            .ok_or_else(|| InstallError::UnknownComponent(component.name.to_string()))?;
        Ok(files
            .iter()
            .map(|file| SourceFile::new(file.path, file.vendored()))
            .collect())
    }
}

/// Component files read from `<root>/<component name>/`, recursively.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Read components from subdirectories of `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ComponentSource for DirectorySource {
    fn fetch(&self, component: &Component) -> Result<Vec<SourceFile>, InstallError> {
        let dir = self.root.join(component.name);
        if !dir.is_dir() {
            return Err(InstallError::MissingSource(dir));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(|e| InstallError::SourceRead {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone()),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let contents = std::fs::read(path).map_err(|source| InstallError::SourceRead {
                path: path.to_path_buf(),
                source,
            })?;
            let relative = path.strip_prefix(&dir).unwrap_or(path).to_path_buf();
            files.push(SourceFile::new(relative, contents));
        }

        debug!(dir = %dir.display(), count = files.len(), "read component directory");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::registry::{lookup, COMPONENTS};
    use std::collections::BTreeSet;
    use std::fs;

    fn installed(name: &str) -> Vec<(String, String)> {
        let component = lookup(name).unwrap();
        EmbeddedSource
            .fetch(component)
            .unwrap()
            .into_iter()
            .map(|f| {
                (
                    f.relative_path.to_string_lossy().into_owned(),
                    String::from_utf8(f.contents).unwrap(),
                )
            })
            .collect()
    }

    /// First path segment of every top-level `use` line.
    fn use_roots(text: &str) -> BTreeSet<String> {
        text.lines()
            .filter_map(|line| line.strip_prefix("use "))
            .filter_map(|path| path.split(|c| c == ':' || c == ';' || c == '{').next())
            .map(|root| root.trim().to_string())
            .collect()
    }

    #[test]
    fn embedded_source_matches_registry_file_lists() {
        for component in COMPONENTS {
            let paths: Vec<_> = installed(component.name).into_iter().map(|(p, _)| p).collect();
            assert_eq!(paths, component.files, "{}", component.name);
        }
    }

    #[test]
    fn embedded_search_bar_widget_is_the_real_widget() {
        let files = installed("search-bar");
        let (_, widget) = files.iter().find(|(p, _)| p == "widget.rs").unwrap();
        assert!(widget.contains("pub struct SearchBarWidget"));
        assert!(widget.contains("use super::state::SearchBar;"));
    }

    #[test]
    fn installed_files_carry_no_crate_paths_or_tests() {
        for component in COMPONENTS {
            for (path, text) in installed(component.name) {
                let at = format!("{}/{}", component.name, path);
                assert!(!text.contains("crate::"), "{at} refers to this crate");
                assert!(!text.contains("#[cfg(test)]"), "{at} ships tests");
                assert!(!text.contains("#[path"), "{at} ships a #[path] module");
                assert!(text.ends_with("}\n") || path == "mod.rs", "{at} was cut short");
            }
        }
    }

    #[test]
    fn sibling_imports_and_modules_resolve_to_shipped_files() {
        for component in COMPONENTS {
            let files = installed(component.name);
            let shipped: BTreeSet<String> = files
                .iter()
                .map(|(p, _)| p.trim_end_matches(".rs").to_string())
                .collect();

            for (path, text) in &files {
                for sibling in text
                    .lines()
                    .filter_map(|line| line.strip_prefix("use super::"))
                    .filter_map(|rest| rest.split("::").next())
                {
                    assert!(
                        shipped.contains(sibling),
                        "{}/{path} imports missing module {sibling}",
                        component.name
                    );
                }
            }

            let (_, root) = files.iter().find(|(p, _)| p == "mod.rs").unwrap();
            let declared: BTreeSet<String> = root
                .lines()
                .filter_map(|line| line.strip_prefix("pub mod "))
                .map(|m| m.trim_end_matches(';').to_string())
                .collect();
            let expected: BTreeSet<String> =
                shipped.iter().filter(|m| *m != "mod").cloned().collect();
            assert_eq!(declared, expected, "{}", component.name);
        }
    }

    #[test]
    fn external_crates_are_listed_as_dependencies() {
        for component in COMPONENTS {
            let listed: BTreeSet<String> = component
                .dependencies
                .iter()
                .map(|d| d.name.replace('-', "_"))
                .collect();
            let used: BTreeSet<String> = installed(component.name)
                .iter()
                .flat_map(|(_, text)| use_roots(text))
                .filter(|root| !matches!(root.as_str(), "std" | "core" | "super" | "self"))
                .collect();
            assert_eq!(used, listed, "{}", component.name);
        }
    }

    #[test]
    fn import_rewrites_match_their_sources() {
        for file in SEARCH_BAR_FILES.iter().chain(TIMELINE_FILES) {
            for (from, _) in file.imports {
                assert!(
                    strip_test_module(file.source).contains(from),
                    "{}: import {from:?} no longer present",
                    file.path
                );
            }
        }
    }

    #[test]
    fn strip_test_module_keeps_code_before_tests() {
        let source = "fn a() {}\n\n// ===== Tests =====\n\n#[cfg(test)]\nmod tests {\n    use super::*;\n}\n";
        assert_eq!(strip_test_module(source), "fn a() {}");
        assert_eq!(strip_test_module("fn b() {}\n"), "fn b() {}");
    }

    #[test]
    fn directory_source_walks_recursively() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("timeline");
        fs::create_dir_all(dir.join("extra")).unwrap();
        fs::write(dir.join("mod.rs"), "pub mod extra;").unwrap();
        fs::write(dir.join("extra").join("notes.md"), "hi").unwrap();

        let component = lookup("timeline").unwrap();
        let files = DirectorySource::new(root.path()).fetch(component).unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.relative_path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("extra").join("notes.md"), PathBuf::from("mod.rs")]
        );
        assert_eq!(files[1].contents, b"pub mod extra;");
    }

    #[test]
    fn directory_source_reports_missing_component_dir() {
        let root = tempfile::tempdir().unwrap();
        let component = lookup("search-bar").unwrap();
        let err = DirectorySource::new(root.path()).fetch(component).unwrap_err();
        assert!(matches!(err, InstallError::MissingSource(p) if p == root.path().join("search-bar")));
    }
}
