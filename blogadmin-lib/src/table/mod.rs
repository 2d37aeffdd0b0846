//! Client-side table view: search, sort and paginate an in-memory record
//! collection.
//!
//! The view derives its rows through a pure pipeline on every read:
//!
//! ```text
//! records ──filter(search)──▶ filtered ──sort(key, dir)──▶ sorted ──slice(page)──▶ rows
//! ```
//!
//! No stage mutates the records. The user-driven [`ViewState`] (search text,
//! sort key and direction, page) is owned by the [`TableView`].

mod actions;
mod collation;
mod column;
mod filter;
mod page;
mod render;
mod sort;
mod state;
mod view;

pub use actions::*;
pub use collation::Collation;
pub use column::*;
pub use filter::filter_records;
pub use page::Pagination;
pub use render::*;
pub use sort::SortStrategy;
pub use sort::compare_records;
pub use sort::sort_records;
pub use state::*;
pub use view::TableView;
