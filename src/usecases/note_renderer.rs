//! Markdown rendering for a week's note. Fixed layout, no template engine.

use crate::domain::{DomainError, TodoLine, WeekWindow, day_with_suffix};
use chrono::Datelike;
use std::io::Write;

/// Render the note for `window`, listing `todos` under a carry-over heading when there are any.
///
/// Layout:
/// ```text
/// # Week of the 20th (February 2023)
///
/// ### Last Week's Remaining TODOs
/// - [ ] carried item
///
///
/// ### Monday 20
///
/// ```
/// Each weekday gets a blank line, its heading, and a blank line. A day in a different month
/// from the first day gets ` (March 2023)` appended to its heading.
pub fn render_note(window: &WeekWindow, todos: &[TodoLine]) -> String {
    let day_one = window.first();
    let mut md = String::new();

    md.push_str(&format!(
        "# Week of the {} ({} {})\n",
        day_with_suffix(day_one.day()),
        day_one.format("%B"),
        day_one.year()
    ));

    if !todos.is_empty() {
        md.push_str("\n### Last Week's Remaining TODOs\n");
        for todo in todos {
            md.push_str(todo.as_str());
            md.push('\n');
        }
        md.push('\n');
    }

    for date in window.iter() {
        md.push_str(&format!("\n### {} {:02}", date.format("%A"), date.day()));
        if date.month() != day_one.month() {
            md.push_str(&format!(" ({} {})", date.format("%B"), date.year()));
        }
        md.push_str("\n\n");
    }

    md
}

/// Render and write the note. No rollback: a failed write may leave a partial file behind.
pub fn write_note(
    writer: &mut dyn Write,
    window: &WeekWindow,
    todos: &[TodoLine],
) -> Result<(), DomainError> {
    let md = render_note(window, todos);
    writer
        .write_all(md.as_bytes())
        .map_err(|e| DomainError::Render(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| DomainError::Render(e.to_string()))
}
