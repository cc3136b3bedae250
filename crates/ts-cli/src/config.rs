//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use ts_core::Options;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Time format patterns, tried in order.
    pub time_formats: Vec<String>,

    /// Root labels excluded from totals and output (case-insensitive).
    pub blacklist: Vec<String>,

    /// Substring marking an abbreviated label.
    pub elision_marker: String,

    /// Indentation for each level of the rendered tree.
    pub indent: String,
}

impl Default for Config {
    fn default() -> Self {
        let options = Options::default();
        let mut blacklist: Vec<String> = options.blacklist.into_iter().collect();
        blacklist.sort();
        Self {
            time_formats: options.time_formats,
            blacklist,
            elision_marker: options.elision_marker,
            indent: "    ".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TS_*)
        figment = figment.merge(Env::prefixed("TS_"));

        figment.extract()
    }

    /// Converts into the core engine's options.
    pub fn to_options(&self) -> Options {
        Options {
            time_formats: self.time_formats.clone(),
            blacklist: self
                .blacklist
                .iter()
                .map(|label| label.to_lowercase())
                .collect(),
            elision_marker: self.elision_marker.clone(),
        }
    }
}

/// Returns the platform-specific config directory for ts.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ts"))
}
