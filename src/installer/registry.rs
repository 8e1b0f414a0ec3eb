//! Components that `adamui add` knows how to install.

use crate::model::InstallError;

/// A crate the host project must depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    /// Crate name on crates.io.
    pub name: &'static str,
    /// Version requirement.
    pub version: &'static str,
    /// Cargo features the component relies on.
    pub features: &'static [&'static str],
}

impl Dependency {
    /// The `[dependencies]` line for the host's `Cargo.toml`.
    pub fn manifest_line(&self) -> String {
        if self.features.is_empty() {
            format!("{} = \"{}\"", self.name, self.version)
        } else {
            let features: Vec<String> = self.features.iter().map(|f| format!("\"{f}\"")).collect();
            format!(
                "{} = {{ version = \"{}\", features = [{}] }}",
                self.name,
                self.version,
                features.join(", ")
            )
        }
    }
}

/// An installable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Registry key, as typed on the command line.
    pub name: &'static str,
    /// Primary type exported by the component.
    pub display_name: &'static str,
    /// Rust module name, also the directory the component is installed under.
    pub module: &'static str,
    /// Files that make up the component, relative to its directory.
    pub files: &'static [&'static str],
    /// Crates the host project must depend on.
    pub dependencies: &'static [Dependency],
}

impl Component {
    /// Line a host project uses to bring the component into scope.
    pub fn import_example(&self) -> String {
        format!(
            "use crate::components::{}::{{{}, {}Widget}};",
            self.module, self.display_name, self.display_name
        )
    }
}

const RATATUI: Dependency = Dependency {
    name: "ratatui",
    version: "0.29",
    features: &[],
};
const SERDE: Dependency = Dependency {
    name: "serde",
    version: "1",
    features: &["derive"],
};
const TRACING: Dependency = Dependency {
    name: "tracing",
    version: "0.1",
    features: &[],
};
const UNICODE_WIDTH: Dependency = Dependency {
    name: "unicode-width",
    version: "0.2",
    features: &[],
};

/// Every component `adamui add` can install.
pub const COMPONENTS: &[Component] = &[
    Component {
        name: "search-bar",
        display_name: "SearchBar",
        module: "search_bar",
        files: &[
            "mod.rs",
            "debounce.rs",
            "helpers.rs",
            "identifiers.rs",
            "state.rs",
            "styles.rs",
            "suggestion.rs",
            "widget.rs",
        ],
        dependencies: &[RATATUI, SERDE, TRACING, UNICODE_WIDTH],
    },
    Component {
        name: "timeline",
        display_name: "Timeline",
        module: "timeline",
        files: &[
            "mod.rs",
            "helpers.rs",
            "identifiers.rs",
            "model.rs",
            "state.rs",
            "styles.rs",
            "widget.rs",
        ],
        dependencies: &[RATATUI, SERDE, TRACING, UNICODE_WIDTH],
    },
];

/// Find a component by its registry key.
pub fn lookup(name: &str) -> Result<&'static Component, InstallError> {
    COMPONENTS
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| InstallError::UnknownComponent(name.to_string()))
}
