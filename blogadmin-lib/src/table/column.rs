//! Column descriptors

use std::fmt;
use std::sync::Arc;

use crate::model::Record;

/// Custom cell renderer.
pub type RenderFn = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// What a column shows: a record field or the per-row action controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey {
    /// A record field, by name.
    Field(String),
    /// The synthetic actions pseudo-column.
    Actions,
}

impl ColumnKey {
    /// Returns the field name, or `None` for the actions column.
    pub fn field(&self) -> Option<&str> {
        match self {
            ColumnKey::Field(name) => Some(name),
            ColumnKey::Actions => None,
        }
    }

    /// Returns `true` for a field column.
    pub fn is_field(&self) -> bool {
        matches!(self, ColumnKey::Field(_))
    }
}

/// Describes one table column.
///
/// Only field columns can be sortable; calling [`Column::sortable`] on the
/// actions column has no effect.
///
/// # Example
///
/// ```
/// use blogadmin_lib::table::Column;
///
/// let columns = vec![
///     Column::field("id", "ID").sortable(),
///     Column::field("title", "Title").sortable(),
///     Column::field("viewsCount", "Views").render(|r| format!("{} views", r.display("viewsCount"))),
///     Column::actions("Actions").sortable(),
/// ];
///
/// assert!(columns[1].is_sortable());
/// assert!(!columns[3].is_sortable());
/// ```
#[derive(Clone)]
pub struct Column {
    key: ColumnKey,
    label: String,
    sortable: bool,
    render: Option<RenderFn>,
}

impl Column {
    /// Creates a column showing a record field.
    pub fn field(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: ColumnKey::Field(key.into()),
            label: label.into(),
            sortable: false,
            render: None,
        }
    }

    /// Creates the actions column.
    pub fn actions(label: impl Into<String>) -> Self {
        Self {
            key: ColumnKey::Actions,
            label: label.into(),
            sortable: false,
            render: None,
        }
    }

    /// Marks a field column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = self.key.is_field();
        self
    }

    /// Overrides the default textual rendering of the cell.
    pub fn render(mut self, f: impl Fn(&Record) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn key(&self) -> &ColumnKey {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Renders the cell text for a record.
    ///
    /// Returns `None` for the actions column, whose cell is not text.
    pub fn cell_text(&self, record: &Record) -> Option<String> {
        let field = self.key.field()?;
        Some(match &self.render {
            Some(render) => render(record),
            None => record.display(field),
        })
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish()
    }
}
