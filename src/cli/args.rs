//! CLI argument definitions for `StudyHub`

use chrono::{NaiveDate, Weekday};
use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use study_hub::config::ConfigOverrides;
use study_hub::core::due::AssignmentView;
use study_hub::core::models::parse_weekday;
use study_hub::core::notes::NoteView;
use study_hub::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Grades page views
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum GradesViewArg {
    /// Per-subject breakdown of graded components
    #[default]
    Subjects,
    /// What each subject needs on its remaining work
    Calculator,
    /// Overall performance and GPA summary
    Analytics,
}

/// Assignment list filters
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum AssignmentViewArg {
    /// Every assignment
    #[default]
    All,
    /// Not started
    Pending,
    /// Started
    InProgress,
    /// Handed in
    Completed,
}

impl From<AssignmentViewArg> for AssignmentView {
    fn from(arg: AssignmentViewArg) -> Self {
        match arg {
            AssignmentViewArg::All => Self::All,
            AssignmentViewArg::Pending => Self::Pending,
            AssignmentViewArg::InProgress => Self::InProgress,
            AssignmentViewArg::Completed => Self::Completed,
        }
    }
}

/// Note list filters
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum NoteViewArg {
    /// Every note
    #[default]
    All,
    /// Most recently modified
    Recent,
    /// Shared with others
    Shared,
    /// Grouped by subject
    Subjects,
}

impl From<NoteViewArg> for NoteView {
    fn from(arg: NoteViewArg) -> Self {
        match arg {
            NoteViewArg::All => Self::All,
            NoteViewArg::Recent => Self::Recent,
            NoteViewArg::Shared => Self::Shared,
            NoteViewArg::Subjects => Self::BySubject,
        }
    }
}

/// Parse a `YYYY-MM-DD` date argument
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show settings.
    ///
    /// With a KEY, prints just that value. Without one, prints every section
    /// and where planner data is read from.
    Get {
        /// Setting to show (e.g., `level`, `data_file`, `recent_notes`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Change a setting and save it.
    ///
    /// Keys: `level`, `file`, `verbose` ([logging]); `data_file`, `reports_dir`
    /// ([paths]); `upcoming_assignments`, `recent_notes` ([dashboard]).
    Set {
        /// Setting to change
        #[arg(value_name = "KEY")]
        key: String,
        /// New value
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Restore one setting to its default.
    Unset {
        /// Setting to restore
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Restore every setting to its default (asks first; planner data is kept).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or change StudyHub settings ([logging], [paths], [dashboard]).
    ///
    /// Without a subcommand, shows every setting.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Today's classes, urgent assignments, recent grades and headline numbers.
    Dashboard,
    /// Grades, GPA and the what-if calculator.
    Grades {
        /// Which grades view to show
        #[arg(long, value_enum, default_value_t = GradesViewArg::Subjects)]
        view: GradesViewArg,

        /// Limit output to one subject (course code, case-insensitive)
        #[arg(long, value_name = "CODE")]
        subject: Option<String>,

        /// Target percentage for the calculator (defaults to each subject's own target)
        #[arg(long, value_name = "PCT")]
        target: Option<f64>,
    },
    /// Tracked assignments and deadlines.
    Assignments {
        /// Which assignments to list
        #[arg(long, value_enum, default_value_t = AssignmentViewArg::All)]
        view: AssignmentViewArg,
    },
    /// Weekly class timetable.
    ///
    /// Without `--day`, prints the hourly grid for the whole week.
    Timetable {
        /// Show the classes of a single day instead of the grid
        #[arg(long, value_name = "DAY", value_parser = parse_weekday)]
        day: Option<Weekday>,
    },
    /// Notes and documents.
    Notes {
        /// Which notes to list
        #[arg(long, value_enum, default_value_t = NoteViewArg::All)]
        view: NoteViewArg,

        /// Filter by title, subject or tag (case-insensitive)
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,
    },
    /// Generate a progress report.
    ///
    /// Writes a Markdown or HTML snapshot of grades, deadlines, timetable and notes.
    Report {
        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Validate the planner data file and list any problems.
    Check,
}

#[derive(Parser, Debug)]
#[command(
    name = "studyhub",
    about = "StudyHub academic planner",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Planner data file (TOML). Falls back to config `data_file`, then the built-in sample.
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Evaluate deadlines and the timetable as of this date instead of now (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. `--data` doubles as the data file override so the
    /// effective configuration reflects the file actually in use.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_file: self.data.as_ref().map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            data: None,
            today: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_file.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare(Command::Dashboard);
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.data = Some(PathBuf::from("/home/me/planner.toml"));
        cli.reports_dir = Some(PathBuf::from("/output"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(
            overrides.data_file,
            Some("/home/me/planner.toml".to_string())
        );
        assert_eq!(overrides.reports_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "studyhub",
            "--today",
            "2024-01-09",
            "assignments",
            "--view",
            "in-progress",
        ])
        .unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 1, 9));
        match cli.command {
            Command::Assignments { view } => {
                assert_eq!(AssignmentView::from(view), AssignmentView::InProgress);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_date_and_day() {
        assert!(Cli::try_parse_from(["studyhub", "--today", "09/01/2024", "dashboard"]).is_err());
        assert!(Cli::try_parse_from(["studyhub", "timetable", "--day", "Caturday"]).is_err());
    }

    #[test]
    fn test_parse_views_from_command_line() {
        let cli = Cli::try_parse_from(["studyhub", "notes", "--view", "subjects"]).unwrap();
        match cli.command {
            Command::Notes { view, .. } => assert_eq!(NoteView::from(view), NoteView::BySubject),
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["studyhub", "notes", "--view", "starred"]).is_err());
        assert!(Cli::try_parse_from(["studyhub", "assignments", "--view", "archived"]).is_err());
    }

    #[test]
    fn test_view_conversions() {
        assert_eq!(NoteView::from(NoteViewArg::Subjects), NoteView::BySubject);
        assert_eq!(
            AssignmentView::from(AssignmentViewArg::Completed),
            AssignmentView::Completed
        );
    }
}
