//! Notes command handler

use chrono::NaiveDate;
use study_hub::core::dataset::Dataset;
use study_hub::core::models::Note;
use study_hub::core::notes::{self, NoteStats, NoteView};
use study_hub::verbose;

/// List notes for a view, optionally narrowed by a search query
pub fn run(
    data: &Dataset,
    view: NoteView,
    query: Option<&str>,
    today: NaiveDate,
    recent_limit: usize,
) {
    let stats = NoteStats::collect(&data.notes);
    println!("\n=== Notes ({view}) ===");
    println!(
        "Total: {}   Shared: {}   Subjects: {}   Storage: {:.1} MB",
        stats.total, stats.shared, stats.subjects, stats.total_mb
    );

    let pool: Vec<Note> = match query {
        Some(q) => notes::search(&data.notes, q).into_iter().cloned().collect(),
        None => data.notes.clone(),
    };
    if let Some(q) = query {
        verbose!("{} notes match '{q}'", pool.len());
    }

    match view {
        NoteView::All => print_list(&pool.iter().collect::<Vec<_>>(), today),
        NoteView::Recent => print_list(&notes::recent(&pool, recent_limit), today),
        NoteView::Shared => print_list(&notes::shared(&pool), today),
        NoteView::BySubject => {
            let groups = notes::by_subject(&pool);
            if groups.is_empty() {
                println!("\nNo notes found.");
            }
            for (subject, members) in groups {
                println!("\n{subject} ({})", members.len());
                print_list(&members, today);
            }
        }
    }
}

fn print_list(list: &[&Note], today: NaiveDate) {
    if list.is_empty() {
        println!("\nNo notes found.");
        return;
    }
    println!();
    for note in list {
        let shared = if note.shared { "shared" } else { "" };
        println!(
            "  {:<44} {:<12} {:<11} {:<12} {:>7} {shared}",
            note.title,
            note.subject,
            note.kind.to_string(),
            notes::modified_label(note.last_modified, today),
            note.size
        );
        if !note.tags.is_empty() {
            verbose!("      #{}", note.tags.join(" #"));
        }
    }
}
