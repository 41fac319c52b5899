#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod prefs;
pub mod qr;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{
    Environment, LinkCategory, LinkDefinition, ResolvedLink, catalog, environments,
    group_by_category, resolve, resolve_all,
};
pub use ui::{DeepLinkTesterApp, LaunchOptions};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

use crate::config::PERSISTENCE;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start on this environment for this session only (the saved choice is kept)
    #[arg(long, value_parser = parse_environment)]
    pub environment: Option<usize>,

    /// JSON file holding the saved environment preference
    #[arg(long, default_value = PERSISTENCE.preference_file)]
    pub state_file: PathBuf,

    /// Forget the saved environment and start on the default
    #[arg(long, default_value_t = false)]
    pub reset_preference: bool,
}

/// Accepts an environment name ("production", "Development", ...) and yields its index.
pub fn parse_environment(value: &str) -> Result<usize, String> {
    domain::environment_index_by_name(value).ok_or_else(|| {
        let names: Vec<&str> = environments().iter().map(|env| env.name).collect();
        format!("unknown environment '{}', expected one of: {}", value, names.join(", "))
    })
}

impl Cli {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn launch_options(&self) -> LaunchOptions {
        let store = prefs::JsonFileStore::open(&self.state_file);
        log::info!("Environment preference file: {}", store.path().display());
        LaunchOptions {
            environment_override: self.environment,
            preference_store: Box::new(store),
            reset_preference: self.reset_preference,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, options: LaunchOptions) -> Box<dyn eframe::App> {
    #[cfg(debug_assertions)]
    if let Err(e) = domain::validate_catalog(catalog()) {
        log::error!("Catalog is invalid: {}", e);
    }

    Box::new(ui::DeepLinkTesterApp::new(cc, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_environment_names() {
        let cli = Cli::try_parse_from(["perps-deeplinks", "--environment", "development"]).unwrap();
        assert_eq!(cli.environment, Some(1));
        assert_eq!(cli.state_file, PathBuf::from(PERSISTENCE.preference_file));
        assert!(!cli.reset_preference);
    }

    #[test]
    fn cli_rejects_unknown_environment() {
        let err = Cli::try_parse_from(["perps-deeplinks", "--environment", "staging"]).unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn cli_defaults_to_saved_preference() {
        let cli = Cli::try_parse_from(["perps-deeplinks"]).unwrap();
        assert_eq!(cli.environment, None);
    }
}
