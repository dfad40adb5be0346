//! Unchecked checklist extraction from a note's text.

use super::entities::TodoLine;

/// Unchecked markdown checklist marker. A line counts as a TODO when, after trimming,
/// its first six bytes are exactly this.
pub const TODO_MARKER: &str = "- [ ] ";

impl TodoLine {
    /// Returns the trimmed line if it starts with [`TODO_MARKER`].
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        trimmed
            .starts_with(TODO_MARKER)
            .then(|| Self(trimmed.to_string()))
    }
}

/// All unchecked items in `text`, in file order.
pub fn extract_todos(text: &str) -> Vec<TodoLine> {
    text.lines().filter_map(TodoLine::parse).collect()
}
