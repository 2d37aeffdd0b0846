//! Page controllers
//!
//! An [`EntityPage`] fetches a resource collection through a
//! [`DataService`](crate::api::DataService), feeds it to a
//! [`TableView`](crate::table::TableView) and handles the row actions the
//! table emits: navigation for view/edit, a confirmed delete for delete.
//!
//! User-facing side effects go through injected services ([`Notifier`],
//! [`Confirmer`], [`Navigator`]) so front ends decide how they look.

mod breadcrumbs;
mod definition;
mod page;
mod services;

pub use breadcrumbs::*;
pub use definition::*;
pub use page::*;
pub use services::*;
