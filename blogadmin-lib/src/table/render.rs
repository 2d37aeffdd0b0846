//! Render model produced by [`TableView::render`](super::TableView::render)
//!
//! This is what a front end draws: it carries text and flags, not markup.

use super::ActionSet;

/// Text of the single row shown when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Sort marker drawn next to a header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// The column cannot be sorted.
    None,
    /// Sortable, but not the active sort column.
    Unsorted,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub sortable: bool,
    pub indicator: SortIndicator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Actions(ActionSet),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Identifier of the underlying record.
    pub id: Option<String>,
    /// Alternating background; `false` on the first row.
    pub striped: bool,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    /// A single message row spanning `colspan` columns.
    Placeholder { colspan: usize, message: String },
    /// Nothing to show yet; the busy overlay covers it.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// Current search text; `None` when the table has no searchable fields.
    pub search: Option<String>,
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub footer: Footer,
    /// Draw the busy overlay on top of whatever the body holds.
    pub loading: bool,
}

impl RenderedTable {
    /// Returns the rendered rows, empty for a placeholder body.
    pub fn rows(&self) -> &[RenderedRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Returns `true` if the "no results" row is shown.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, TableBody::Placeholder { .. })
    }
}
