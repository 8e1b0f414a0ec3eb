//! adamui - Entry Point

use adamui::config::keybindings::{KeyBindingError, KeyBindings};
use adamui::config::loader::{self, ConfigError, ResolvedConfig};
use adamui::installer::{
    self, AddOptions, AddOutcome, ComponentSource, DirectorySource, EmbeddedSource,
};
use adamui::model::{AppError, DemoData, InstallError};
use adamui::state::DemoSettings;
use adamui::view::{self, ColorConfig, DemoOptions};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;

/// adamui - terminal UI components you copy into your project
#[derive(Parser, Debug)]
#[command(name = "adamui")]
#[command(version)]
#[command(about = "CLI for installing adamui components")]
pub struct Args {
    #[allow(missing_docs)]
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[allow(missing_docs)]
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a component to your project
    Add {
        /// Name of the component to add
        component: String,

        /// Skip confirmation prompt and overwrite an existing install
        #[arg(short, long)]
        yes: bool,

        /// Project root to install into
        #[arg(long, default_value = ".")]
        dest: PathBuf,

        /// Install from `<DIR>/<component>/` instead of the bundled sources
        #[arg(long, value_name = "DIR")]
        from: Option<PathBuf>,

        /// Components directory inside the project (default: src/components)
        #[arg(long)]
        components_dir: Option<PathBuf>,
    },

    /// List installable components
    List,

    /// Run the interactive widget demo
    Demo {
        /// JSON file with `suggestions` and `timeline` data
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    KeyBinding(#[from] KeyBindingError),

    #[error(transparent)]
    Install(#[from] InstallError),

    #[error(transparent)]
    App(#[from] AppError),
}

fn main() -> ExitCode {
    let args = Args::parse();
    let colors = ColorConfig::from_env_and_args(args.no_color);

    match run(args, colors) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("error: {e}");
            if colors.colors_enabled() {
                eprintln!("{}", message.red());
            } else {
                eprintln!("{message}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, colors: ColorConfig) -> Result<(), CliError> {
    // Defaults → Config File → Env Vars → CLI Args
    let components_dir_override = match &args.command {
        Command::Add { components_dir, .. } => components_dir.clone(),
        _ => None,
    };
    let config = loader::resolve(args.config.clone(), components_dir_override)?;

    // Logging problems must not block installs; report and carry on.
    let _log_guard = match adamui::logging::init(&config.log_file_path) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e}");
            None
        }
    };
    info!(config = ?config, "Configuration loaded and resolved");

    match args.command {
        Command::Add {
            component,
            yes,
            dest,
            from,
            ..
        } => {
            let options = AddOptions {
                dest,
                components_dir: config.components_dir.clone(),
                yes,
            };
            let source: Box<dyn ComponentSource> = match from {
                Some(root) => Box::new(DirectorySource::new(root)),
                None => Box::new(EmbeddedSource),
            };
            let outcome = installer::add(&component, &options, source.as_ref(), |target| {
                installer::prompt_overwrite(
                    &mut std::io::stdin().lock(),
                    &mut std::io::stderr(),
                    target,
                )
            })?;
            match outcome {
                AddOutcome::Installed(report) => {
                    print!("{}", installer::render_report(&report, colors.colors_enabled()));
                }
                AddOutcome::Declined { target } => {
                    println!("Aborted; {} left unchanged.", target.display());
                }
            }
        }
        Command::List => {
            print!("{}", installer::render_list(colors.colors_enabled()));
        }
        Command::Demo { data } => {
            let data = match data {
                Some(path) => DemoData::load(&path).map_err(AppError::from)?,
                None => DemoData::default(),
            };
            view::run_demo(data, demo_options(&config, colors)?)?;
        }
    }

    Ok(())
}

fn demo_options(config: &ResolvedConfig, colors: ColorConfig) -> Result<DemoOptions, KeyBindingError> {
    let key_bindings = KeyBindings::default().with_overrides(
        config
            .keybindings
            .iter()
            .map(|(action, key)| (action.as_str(), key.as_str())),
    )?;
    Ok(DemoOptions {
        settings: DemoSettings {
            max_suggestions: config.max_suggestions,
            debounce: config.debounce,
            timeline_default: config.timeline_default,
        },
        key_bindings,
        colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let err = Args::try_parse_from(["adamui", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["adamui", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["adamui"]).is_err());
    }

    #[test]
    fn test_add_defaults() {
        let args = Args::parse_from(["adamui", "add", "search-bar"]);
        assert_eq!(
            args.command,
            Command::Add {
                component: "search-bar".to_string(),
                yes: false,
                dest: PathBuf::from("."),
                from: None,
                components_dir: None,
            }
        );
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_add_yes_short_and_long() {
        for flag in ["-y", "--yes"] {
            let args = Args::parse_from(["adamui", "add", "timeline", flag]);
            assert!(matches!(args.command, Command::Add { yes: true, .. }), "{flag}");
        }
    }

    #[test]
    fn test_add_requires_component() {
        let err = Args::try_parse_from(["adamui", "add"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_add_paths() {
        let args = Args::parse_from([
            "adamui",
            "add",
            "timeline",
            "--dest",
            "app",
            "--from",
            "vendor/ui",
            "--components-dir",
            "ui",
        ]);
        let Command::Add {
            dest,
            from,
            components_dir,
            ..
        } = args.command
        else {
            panic!("expected add");
        };
        assert_eq!(dest, PathBuf::from("app"));
        assert_eq!(from, Some(PathBuf::from("vendor/ui")));
        assert_eq!(components_dir, Some(PathBuf::from("ui")));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["adamui", "list", "--no-color", "--config", "/c.toml"]);
        assert_eq!(args.command, Command::List);
        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("/c.toml")));
    }

    #[test]
    fn test_demo_data_flag() {
        let args = Args::parse_from(["adamui", "demo", "--data", "demo.json"]);
        assert_eq!(
            args.command,
            Command::Demo {
                data: Some(PathBuf::from("demo.json"))
            }
        );
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        let err = Args::try_parse_from(["adamui", "remove", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_demo_options_follow_config() {
        let mut config = ResolvedConfig {
            max_suggestions: 7,
            ..ResolvedConfig::default()
        };
        config
            .keybindings
            .insert("toggle_node".to_string(), "x".to_string());

        let options = demo_options(&config, ColorConfig::new(false)).unwrap();
        assert_eq!(options.settings.max_suggestions, 7);
        assert_eq!(
            options.key_bindings.get(crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Char('x'),
                crossterm::event::KeyModifiers::NONE
            )),
            Some(adamui::model::KeyAction::ToggleNode)
        );
    }

    #[test]
    fn test_demo_options_reject_bad_binding() {
        let mut config = ResolvedConfig::default();
        config
            .keybindings
            .insert("teleport".to_string(), "t".to_string());
        assert!(demo_options(&config, ColorConfig::new(false)).is_err());
    }
}
