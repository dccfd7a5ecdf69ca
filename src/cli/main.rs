//! Command-line interface entry point for `StudyHub`

mod args;
mod commands;

use args::{Cli, Command};
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::Parser;
use std::path::PathBuf;
use study_hub::config::Config;
use study_hub::core::dataset::Dataset;
use study_hub::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use study_hub::{debug, error, info, warn};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Config commands never need planner data
    let command = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            return;
        }
        other => other,
    };

    let Some((data, source)) = load_dataset(&config) else {
        std::process::exit(1);
    };
    let now = args.today.map_or_else(
        || Local::now().naive_local(),
        |date| date.and_time(NaiveTime::MIN),
    );
    debug!("Evaluating as of {now}");

    match command {
        Command::Config { .. } => {}
        Command::Check => {
            if !commands::check::run(&data, &source) {
                std::process::exit(1);
            }
        }
        command => {
            for issue in data.validate() {
                warn!("{issue}");
            }
            dispatch(command, &data, now, &config);
        }
    }
}

/// Run a subcommand that reads planner data
fn dispatch(command: Command, data: &Dataset, now: NaiveDateTime, config: &Config) {
    let settings = config.dashboard_settings();
    match command {
        Command::Dashboard => commands::dashboard::run(data, now, settings),
        Command::Grades {
            view,
            subject,
            target,
        } => {
            if let Err(e) = commands::grades::run(data, view, subject.as_deref(), target) {
                error!("{e}");
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
        Command::Assignments { view } => commands::assignments::run(data, view.into(), now),
        Command::Timetable { day } => commands::timetable::run(data, day, now),
        Command::Notes { view, search } => commands::notes::run(
            data,
            view.into(),
            search.as_deref(),
            now.date(),
            settings.recent_notes,
        ),
        Command::Report { format, output } => {
            if !commands::report::run(data, now, &format, output.as_deref(), config) {
                std::process::exit(1);
            }
        }
        Command::Config { .. } | Command::Check => {}
    }
}

/// Load planner data: `--data`/config `data_file` when set, otherwise the built-in sample.
///
/// Returns the data with a label describing where it came from, or `None`
/// after reporting a load failure.
fn load_dataset(config: &Config) -> Option<(Dataset, String)> {
    if config.paths.data_file.is_empty() {
        info!("No data file configured; using the built-in sample planner");
        return Some((Dataset::sample(), "built-in sample".to_string()));
    }

    let path = PathBuf::from(&config.paths.data_file);
    match Dataset::load(&path) {
        Ok(data) => {
            info!("Planner data loaded: {}", path.display());
            Some((data, path.display().to_string()))
        }
        Err(e) => {
            error!("Failed to load planner data {}: {e}", path.display());
            eprintln!("✗ Failed to load {}: {e}", path.display());
            None
        }
    }
}
