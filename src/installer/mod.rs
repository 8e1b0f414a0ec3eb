//! The `adamui add` and `adamui list` commands.
//!
//! Installing copies a component's file set into
//! `<dest>/<components_dir>/<module>/`, where `<module>` is the Rust module
//! name the printed import line uses. An existing destination is only
//! overwritten after confirmation (or `--yes`). A failed write leaves any
//! files already written in place.

pub mod registry;
pub mod source;

pub use registry::{COMPONENTS, Component, Dependency, lookup};
pub use source::{ComponentSource, DirectorySource, EmbeddedSource, SourceFile};

use crate::model::InstallError;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Options for a single `add` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOptions {
    /// Project root to install into.
    pub dest: PathBuf,
    /// Components directory relative to `dest`.
    pub components_dir: PathBuf,
    /// Skip the overwrite confirmation.
    pub yes: bool,
}

/// What an `add` run did.
#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// Files were written.
    Installed(InstallReport),
    /// The destination existed and the user declined to overwrite it.
    Declined {
        /// Existing component directory, left untouched.
        target: PathBuf,
    },
}

/// Where a component landed and which files were written.
#[derive(Debug, PartialEq, Eq)]
pub struct InstallReport {
    /// The installed component.
    pub component: &'static Component,
    /// Component directory that received the files.
    pub target: PathBuf,
    /// Paths written, in write order.
    pub written: Vec<PathBuf>,
}

/// Install `name` from `source`.
///
/// `confirm` is asked whether to overwrite when the target directory already
/// exists and `options.yes` is false.
pub fn add<F>(
    name: &str,
    options: &AddOptions,
    source: &dyn ComponentSource,
    mut confirm: F,
) -> Result<AddOutcome, InstallError>
where
    F: FnMut(&Path) -> Result<bool, InstallError>,
{
    let component = registry::lookup(name)?;
    let target = options.dest.join(&options.components_dir).join(component.module);
    let files = source.fetch(component)?;

    if target.exists() && !options.yes && !confirm(&target)? {
        info!(target = %target.display(), "overwrite declined");
        return Ok(AddOutcome::Declined { target });
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = target.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| InstallError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, &file.contents).map_err(|source| {
            warn!(path = %path.display(), error = %source, "write failed");
            InstallError::Write {
                path: path.clone(),
                source,
            }
        })?;
        written.push(path);
    }

    info!(
        component = component.name,
        target = %target.display(),
        files = written.len(),
        "component installed"
    );
    Ok(AddOutcome::Installed(InstallReport {
        component,
        target,
        written,
    }))
}

/// Ask on `output` whether to overwrite `target`, reading one line of `input`.
///
/// Only `y` or `yes` (any case) count as consent; end of input declines.
pub fn prompt_overwrite<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    target: &Path,
) -> Result<bool, InstallError> {
    write!(output, "{} already exists. Overwrite? [y/N] ", target.display())
        .and_then(|()| output.flush())
        .map_err(InstallError::Prompt)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(InstallError::Prompt)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Human-readable summary of a successful install.
pub fn render_report(report: &InstallReport, colors: bool) -> String {
    let component = report.component;
    let headline = format!("✔ Successfully installed {}", component.display_name);
    let mut out = String::new();
    if colors {
        out.push_str(&headline.green().bold().to_string());
    } else {
        out.push_str(&headline);
    }
    out.push_str(&format!(" into {}\n", report.target.display()));

    out.push_str("\nAdd to [dependencies] in Cargo.toml:\n");
    for dep in component.dependencies {
        let line = dep.manifest_line();
        if colors {
            out.push_str(&format!("  {}\n", line.cyan()));
        } else {
            out.push_str(&format!("  {line}\n"));
        }
    }

    out.push_str("\nImport the component like this:\n");
    let import = component.import_example();
    if colors {
        out.push_str(&format!("  {}\n", import.cyan()));
    } else {
        out.push_str(&format!("  {import}\n"));
    }
    out
}

/// Table of installable components for `adamui list`.
pub fn render_list(colors: bool) -> String {
    let width = COMPONENTS.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for component in COMPONENTS {
        let name = format!("{:<width$}", component.name);
        let name = if colors {
            name.bold().to_string()
        } else {
            name
        };
        let deps: Vec<&str> = component.dependencies.iter().map(|d| d.name).collect();
        out.push_str(&format!(
            "{}  {}  ({})\n",
            name,
            component.display_name,
            deps.join(", ")
        ));
    }
    out
}

#[cfg(test)]
#[path = "installer_tests.rs"]
mod tests;
