//! Note listings, search and storage figures

use crate::core::models::Note;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

/// Default number of notes in the recent view
pub const DEFAULT_RECENT_LIMIT: usize = 6;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Which notes to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteView {
    /// Everything, in data order
    #[default]
    All,
    /// Most recently modified first
    Recent,
    /// Shared notes only
    Shared,
    /// Grouped by subject
    BySubject,
}

impl fmt::Display for NoteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Recent => write!(f, "recent"),
            Self::Shared => write!(f, "shared"),
            Self::BySubject => write!(f, "subjects"),
        }
    }
}

/// Most recently modified notes first, at most `limit`
#[must_use]
pub fn recent(notes: &[Note], limit: usize) -> Vec<&Note> {
    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    sorted.truncate(limit);
    sorted
}

/// Shared notes in data order
#[must_use]
pub fn shared(notes: &[Note]) -> Vec<&Note> {
    notes.iter().filter(|n| n.shared).collect()
}

/// Notes grouped by subject, subjects in order of first appearance
#[must_use]
pub fn by_subject(notes: &[Note]) -> Vec<(&str, Vec<&Note>)> {
    let mut groups: Vec<(&str, Vec<&Note>)> = Vec::new();
    for note in notes {
        match groups.iter_mut().find(|(subject, _)| *subject == note.subject) {
            Some((_, members)) => members.push(note),
            None => groups.push((note.subject.as_str(), vec![note])),
        }
    }
    groups
}

/// Case-insensitive match on title, subject or any tag. An empty query matches everything.
#[must_use]
pub fn search<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return notes.iter().collect();
    }
    notes
        .iter()
        .filter(|n| {
            n.title.to_lowercase().contains(&needle)
                || n.subject.to_lowercase().contains(&needle)
                || n.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Relative label for a last-modified date
#[must_use]
pub fn modified_label(date: NaiveDate, today: NaiveDate) -> String {
    match today.signed_duration_since(date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=6 => format!("{days} days ago"),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

/// Parse a human-readable size ("2.3 MB", "950 KB", "12 B") into bytes.
///
/// Units are binary multiples and case-insensitive. A bare number is bytes.
///
/// # Errors
/// Returns an error for a missing or negative number or an unknown unit
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn parse_size(size: &str) -> Result<u64, String> {
    let trimmed = size.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| format!("Invalid size: '{size}'"))?;

    let multiplier: u64 = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "KB" | "K" => 1024,
        "MB" | "M" => 1024 * 1024,
        "GB" | "G" => 1024 * 1024 * 1024,
        other => return Err(format!("Unknown size unit '{other}' in '{size}'")),
    };

    Ok((value * multiplier as f64).round() as u64)
}

/// Headline numbers for the notes page
#[derive(Debug, Clone, PartialEq)]
pub struct NoteStats {
    /// Number of notes
    pub total: usize,
    /// Number of shared notes
    pub shared: usize,
    /// Number of distinct subjects
    pub subjects: usize,
    /// Total size in megabytes; unparsable sizes count as zero
    pub total_mb: f64,
}

impl NoteStats {
    /// Compute over every note
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn collect(notes: &[Note]) -> Self {
        let subjects: HashSet<&str> = notes.iter().map(|n| n.subject.as_str()).collect();
        let bytes: u64 = notes
            .iter()
            .filter_map(|n| parse_size(&n.size).ok())
            .sum();
        Self {
            total: notes.len(),
            shared: notes.iter().filter(|n| n.shared).count(),
            subjects: subjects.len(),
            total_mb: bytes as f64 / BYTES_PER_MB,
        }
    }
}
