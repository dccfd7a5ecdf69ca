//! Configuration module for `StudyHub`

use crate::core::dashboard::{DashboardSettings, DEFAULT_UPCOMING_LIMIT};
use crate::core::notes::DEFAULT_RECENT_LIMIT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside string values
const DIR_VARIABLE: &str = "$STUDY_HUB";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Planner data file; empty means the built-in sample
    #[serde(default)]
    pub data_file: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Dashboard list sizes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of upcoming assignments shown
    #[serde(default)]
    pub upcoming_assignments: usize,
    /// Number of notes in the recent view
    #[serde(default)]
    pub recent_notes: usize,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Dashboard settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override planner data file
    pub data_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$STUDY_HUB` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studyhub`
    /// - macOS: `~/Library/Application Support/studyhub`
    /// - Windows: `%APPDATA%\studyhub`
    #[must_use]
    pub fn get_studyhub_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studyhub")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Fills fields that are empty (or zero for counts) in this config with the
    /// default value. Used on load so that new configuration fields appear in
    /// older config files.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.data_file.is_empty() && !defaults.paths.data_file.is_empty() {
            self.paths.data_file.clone_from(&defaults.paths.data_file);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.dashboard.upcoming_assignments == 0 && defaults.dashboard.upcoming_assignments > 0
        {
            self.dashboard.upcoming_assignments = defaults.dashboard.upcoming_assignments;
            changed = true;
        }
        if self.dashboard.recent_notes == 0 && defaults.dashboard.recent_notes > 0 {
            self.dashboard.recent_notes = defaults.dashboard.recent_notes;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect the current run; the configuration file is not
    /// modified. `None` values leave the loaded value untouched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file.clone_from(data_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Dashboard list sizes, falling back to built-in defaults for zero values
    #[must_use]
    pub const fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            upcoming_assignments: if self.dashboard.upcoming_assignments == 0 {
                DEFAULT_UPCOMING_LIMIT
            } else {
                self.dashboard.upcoming_assignments
            },
            recent_notes: if self.dashboard.recent_notes == 0 {
                DEFAULT_RECENT_LIMIT
            } else {
                self.dashboard.recent_notes
            },
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds and `dconfig.toml` for debug builds,
    /// inside [`get_studyhub_dir`](Self::get_studyhub_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studyhub_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$STUDY_HUB` with the config directory path
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studyhub_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults; `$STUDY_HUB` is expanded in
    /// path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the file exists: load it, merge missing fields from defaults and
    ///   save it back when something was added.
    /// - On first run: create the config directory and write the defaults.
    ///
    /// Falls back to defaults if anything goes wrong while reading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform-specific config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Every settable key with the section it lives in
    pub const KEYS: [(&'static str, &'static str); 7] = [
        ("level", "logging"),
        ("file", "logging"),
        ("verbose", "logging"),
        ("data_file", "paths"),
        ("reports_dir", "paths"),
        ("upcoming_assignments", "dashboard"),
        ("recent_notes", "dashboard"),
    ];

    /// Section a key belongs to (`logging`, `paths` or `dashboard`)
    #[must_use]
    pub fn section_of(key: &str) -> Option<&'static str> {
        let key = key.replace('-', "_");
        Self::KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, section)| *section)
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_file`, `reports_dir`,
    /// `upcoming_assignments`, `recent_notes` (dashes are accepted in place of
    /// underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_file" => Some(self.paths.data_file.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            "upcoming_assignments" => Some(self.dashboard.upcoming_assignments.to_string()),
            "recent_notes" => Some(self.dashboard.recent_notes.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// for that key
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => {
                let normalized = value.to_ascii_lowercase();
                if !matches!(normalized.as_str(), "error" | "warn" | "info" | "debug") {
                    return Err(format!(
                        "Invalid log level '{value}' (expected error, warn, info or debug)"
                    ));
                }
                self.logging.level = normalized;
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_file" => self.paths.data_file = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "upcoming_assignments" => {
                self.dashboard.upcoming_assignments = parse_count(key, value)?;
            }
            "recent_notes" => self.dashboard.recent_notes = parse_count(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "upcoming_assignments" => {
                self.dashboard.upcoming_assignments = defaults.dashboard.upcoming_assignments;
            }
            "recent_notes" => self.dashboard.recent_notes = defaults.dashboard.recent_notes,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it from defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!(
            "Invalid value for '{key}': '{value}' (expected a positive whole number)"
        )),
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[dashboard]")?;
        writeln!(
            f,
            "  upcoming_assignments = {}",
            self.dashboard.upcoming_assignments
        )?;
        writeln!(f, "  recent_notes = {}", self.dashboard.recent_notes)?;

        Ok(())
    }
}
