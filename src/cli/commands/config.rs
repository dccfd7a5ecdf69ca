//! Config command handler
//!
//! Shows and edits the `[logging]`, `[paths]` and `[dashboard]` sections.
//! The planner data file itself is never modified here.

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use std::path::Path;
use study_hub::config::Config;
use study_hub::{error, info, warn};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_all(),
    }
}

fn show_all(config: &Config) {
    println!("\n=== StudyHub Configuration ===\n");
    println!("File: {}\n", Config::get_config_file_path().display());
    print!("{config}");
    println!("\n{}", data_source_line(config));
}

fn show_key(config: &Config, key: &str) {
    if let Some(value) = config.get(key) {
        println!("{value}");
    } else {
        eprintln!("✗ {}", unknown_key_message(key));
        std::process::exit(1);
    }
}

fn set_key(config: &mut Config, key: &str, value: &str) {
    if Config::section_of(key).is_none() {
        eprintln!("✗ {}", unknown_key_message(key));
        std::process::exit(1);
    }
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);

    if key.replace('-', "_") == "data_file" && !value.is_empty() && !Path::new(value).exists() {
        warn!("Planner file {value} does not exist yet; other commands will fail until it is created");
    }
    info!("Config key {key} updated");
    println!("✓ {}", assignment_line(config, key));
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) {
    if Config::section_of(key).is_none() {
        eprintln!("✗ {}", unknown_key_message(key));
        std::process::exit(1);
    }
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);

    info!("Config key {key} restored to default");
    println!("✓ {} (default)", assignment_line(config, key));
}

fn reset_all() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Settings are already at defaults");
        return;
    }

    print!("Reset logging, paths and dashboard settings to defaults? Planner data is kept. (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            error!("Failed to remove config file: {e}");
            eprintln!("✗ Failed to remove config file: {e}");
            std::process::exit(1);
        }
        info!("Config file removed");
        println!("✓ Settings reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// `[section] key = value` for a known key
fn assignment_line(config: &Config, key: &str) -> String {
    let section = Config::section_of(key).unwrap_or("?");
    let key = key.replace('-', "_");
    let value = config.get(&key).unwrap_or_default();
    format!("[{section}] {key} = {value}")
}

fn unknown_key_message(key: &str) -> String {
    let known: Vec<&str> = Config::KEYS.iter().map(|(name, _)| *name).collect();
    format!("Unknown config key '{key}'. Known keys: {}", known.join(", "))
}

/// Where planner data comes from with the current settings
fn data_source_line(config: &Config) -> String {
    if config.paths.data_file.is_empty() {
        "Planner data: built-in sample (set data_file to use your own)".to_string()
    } else {
        format!("Planner data: {}", config.paths.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_line_names_section() {
        let mut config = Config::from_defaults();
        config.set("recent-notes", "4").unwrap();
        assert_eq!(
            assignment_line(&config, "recent-notes"),
            "[dashboard] recent_notes = 4"
        );
        assert_eq!(
            assignment_line(&config, "level"),
            format!("[logging] level = {}", config.logging.level)
        );
    }

    #[test]
    fn test_unknown_key_lists_known_keys() {
        let message = unknown_key_message("colour");
        assert!(message.contains("'colour'"));
        assert!(message.contains("data_file"));
        assert!(message.contains("upcoming_assignments"));
    }

    #[test]
    fn test_data_source_line() {
        let mut config = Config::from_defaults();
        config.paths.data_file = String::new();
        assert!(data_source_line(&config).contains("built-in sample"));

        config.paths.data_file = "/home/me/planner.toml".to_string();
        assert_eq!(data_source_line(&config), "Planner data: /home/me/planner.toml");
    }
}
