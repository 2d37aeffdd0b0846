//! The table view component

use std::sync::Arc;

use super::Action;
use super::Cell;
use super::Collation;
use super::Column;
use super::Footer;
use super::HeaderCell;
use super::NO_RESULTS_MESSAGE;
use super::Pagination;
use super::RenderedRow;
use super::RenderedTable;
use super::RowActions;
use super::SortDirection;
use super::SortIndicator;
use super::TableBody;
use super::ViewState;
use super::filter_records;
use super::sort_records;
use crate::model::Record;

/// A searchable, sortable, paginated view over a record collection.
///
/// The view owns the latest record snapshot and its [`ViewState`]. Every
/// read (`sorted`, `current_rows`, `render`) recomputes the pipeline, so
/// state changes always apply to the current records.
///
/// # Example
///
/// ```
/// use blogadmin_lib::model::Record;
/// use blogadmin_lib::table::{Column, TableView};
///
/// let mut table = TableView::new(vec![
///     Column::field("id", "ID"),
///     Column::field("name", "Name").sortable(),
/// ])
/// .page_size(5)
/// .searchable(["name"]);
///
/// table.set_records(vec![
///     Record::new().set("id", "1").set("name", "Banana"),
///     Record::new().set("id", "2").set("name", "apple"),
/// ]);
///
/// table.click_header(1);
/// let names: Vec<String> = table.current_rows().iter().map(|r| r.display("name")).collect();
/// assert_eq!(names, ["apple", "Banana"]);
/// ```
#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<Column>,
    searchable_fields: Vec<String>,
    pagination: Pagination,
    collation: Collation,
    actions: RowActions,
    records: Vec<Record>,
    state: ViewState,
    loading: bool,
}

impl TableView {
    /// Creates a view with the given columns and no records.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            searchable_fields: Vec::new(),
            pagination: Pagination::default(),
            collation: Collation::default(),
            actions: RowActions::default(),
            records: Vec::new(),
            state: ViewState::default(),
            loading: false,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Sets the number of rows per page (default 10).
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.pagination = Pagination::new(page_size);
        self
    }

    /// Sets the fields the search box matches against.
    ///
    /// Without searchable fields the search box is hidden and every record
    /// passes the filter.
    pub fn searchable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the collation used for string sorting.
    pub fn collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    pub fn on_view(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.actions.on_view = Some(Arc::new(f));
        self
    }

    pub fn on_edit(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.actions.on_edit = Some(Arc::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.actions.on_delete = Some(Arc::new(f));
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable_fields
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Replaces the record snapshot.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.clamp_page();
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Removes every record carrying the given identifier.
    ///
    /// Returns the number of records removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id().as_deref() != Some(id));
        self.clamp_page();
        before - self.records.len()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
        self.clamp_page();
    }

    /// Handles a click on the header of column `index`.
    ///
    /// Returns `false` if the column does not exist or is not sortable.
    pub fn click_header(&mut self, index: usize) -> bool {
        let Some(field) = self
            .columns
            .get(index)
            .filter(|c| c.is_sortable())
            .and_then(|c| c.key().field())
        else {
            return false;
        };
        let field = field.to_string();
        self.state.toggle_sort(&field);
        true
    }

    /// Sorts by a field in an explicit direction.
    pub fn sort_by(&mut self, key: impl Into<String>, direction: SortDirection) {
        self.state.sort_key = Some(key.into());
        self.state.sort_direction = direction;
    }

    /// Goes to `page`, clamped into the valid range. Returns the new page.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.state.page = self.pagination.clamp(page, self.filtered_len());
        self.state.page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.current_page().saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.current_page().saturating_sub(1))
    }

    /// Triggers a row action on row `row` of the current page.
    ///
    /// Returns `false` if the row does not exist or no callback is set for
    /// the action.
    pub fn trigger(&self, action: Action, row: usize) -> bool {
        let rows = self.current_rows();
        match rows.get(row) {
            Some(record) => self.actions.dispatch(action, record),
            None => false,
        }
    }

    /// Triggers a row action on the record with the given identifier,
    /// wherever it sits in the collection.
    pub fn trigger_for_id(&self, action: Action, id: &str) -> bool {
        match self.records.iter().find(|r| r.id().as_deref() == Some(id)) {
            Some(record) => self.actions.dispatch(action, record),
            None => false,
        }
    }

    // =========================================================================
    // Derived data
    // =========================================================================

    /// Records passing the search filter, in input order.
    pub fn filtered(&self) -> Vec<&Record> {
        filter_records(&self.records, &self.searchable_fields, &self.state.search)
    }

    fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    /// Filtered records in sort order.
    pub fn sorted(&self) -> Vec<&Record> {
        let mut rows = self.filtered();
        if let Some(key) = &self.state.sort_key {
            sort_records(&mut rows, key, self.state.sort_direction, self.collation);
        }
        rows
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered_len())
    }

    /// The current page, clamped into `[1, total_pages]`.
    pub fn current_page(&self) -> usize {
        self.pagination.clamp(self.state.page, self.filtered_len())
    }

    /// Records on the current page.
    pub fn current_rows(&self) -> Vec<&Record> {
        let sorted = self.sorted();
        self.pagination.slice(&sorted, self.state.page).to_vec()
    }

    fn clamp_page(&mut self) {
        self.state.page = self.pagination.clamp(self.state.page, self.filtered_len());
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders the current page.
    pub fn render(&self) -> RenderedTable {
        let capabilities = self.actions.capabilities();

        let headers = self
            .columns
            .iter()
            .map(|column| {
                let indicator = if !column.is_sortable() {
                    SortIndicator::None
                } else if column.key().field() == self.state.sort_key.as_deref() {
                    match self.state.sort_direction {
                        SortDirection::Asc => SortIndicator::Ascending,
                        SortDirection::Desc => SortIndicator::Descending,
                    }
                } else {
                    SortIndicator::Unsorted
                };
                HeaderCell {
                    label: column.label().to_string(),
                    sortable: column.is_sortable(),
                    indicator,
                }
            })
            .collect();

        let sorted = self.sorted();
        let total_pages = self.pagination.total_pages(sorted.len());
        let page = self.pagination.clamp(self.state.page, sorted.len());
        let rows = self.pagination.slice(&sorted, page);

        let body = if rows.is_empty() {
            if self.loading {
                TableBody::Empty
            } else {
                TableBody::Placeholder {
                    colspan: self.columns.len(),
                    message: NO_RESULTS_MESSAGE.to_string(),
                }
            }
        } else {
            TableBody::Rows(
                rows.iter()
                    .enumerate()
                    .map(|(idx, record)| RenderedRow {
                        id: record.id(),
                        striped: idx % 2 == 1,
                        cells: self
                            .columns
                            .iter()
                            .map(|column| match column.cell_text(record) {
                                Some(text) => Cell::Text(text),
                                None => Cell::Actions(capabilities),
                            })
                            .collect(),
                    })
                    .collect(),
            )
        };

        RenderedTable {
            search: (!self.searchable_fields.is_empty()).then(|| self.state.search.clone()),
            headers,
            body,
            footer: Footer {
                page,
                total_pages,
                has_previous: page > 1,
                has_next: page < total_pages,
            },
            loading: self.loading,
        }
    }
}
