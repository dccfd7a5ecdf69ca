//! Report command handler
//!
//! Generates progress reports in Markdown or HTML from the loaded planner data.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use study_hub::config::Config;
use study_hub::core::dataset::Dataset;
use study_hub::core::report::{
    formats::ReportFormat, HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use study_hub::{error, info};

/// Run the report command. Returns `false` when the report could not be written.
///
/// # Arguments
/// * `data` - Planner data to report on
/// * `now` - Moment the report describes
/// * `format_str` - Report format (markdown, md, html)
/// * `output_file` - Optional output path
/// * `config` - Configuration holding the default reports directory
pub fn run(
    data: &Dataset,
    now: NaiveDateTime,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> bool {
    match generate_report(data, now, format_str, output_file, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
            true
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("{err}");
            false
        }
    }
}

/// Default output path: `<reports_dir>/<student>_<date>_report.<ext>`
fn default_output_path(
    data: &Dataset,
    now: NaiveDateTime,
    format: ReportFormat,
    config: &Config,
) -> PathBuf {
    let student: String = data
        .profile
        .display_name()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let filename = format!(
        "{student}_{}_report.{}",
        now.format("%Y-%m-%d"),
        format.extension()
    );
    PathBuf::from(&config.paths.reports_dir).join(filename)
}

fn generate_report(
    data: &Dataset,
    now: NaiveDateTime,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    // Parse the format
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let output_path = output_file.map_or_else(
        || default_output_path(data, now, format, config),
        Path::to_path_buf,
    );

    let ctx = ReportContext::new(data, now, config.dashboard_settings());
    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(&ctx, &output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?,
        ReportFormat::Html => HtmlReporter::new()
            .generate(&ctx, &output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?,
    }

    Ok(output_path)
}
