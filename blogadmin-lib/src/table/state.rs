//! View state: search text, sort key and direction, current page

use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// The table's local, user-driven state.
///
/// `page` is 1-based and may be out of range after the data shrinks; readers
/// clamp it against the current page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            page: 1,
        }
    }
}

impl ViewState {
    /// Applies a header click on a sortable column.
    ///
    /// Clicking the active column flips the direction; clicking another
    /// column makes it active in ascending order.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_direction = SortDirection::Asc;
        }
    }
}
