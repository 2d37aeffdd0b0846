//! The entity list page

use std::sync::Arc;

use tokio::sync::mpsc;

use super::Confirmer;
use super::Navigator;
use super::Notifier;
use super::PageDefinition;
use crate::api::DataService;
use crate::model::Record;
use crate::model::Resource;
use crate::table::Action;
use crate::table::TableView;

/// Error shown when loading fails without a server message.
pub const LOAD_ERROR_MESSAGE: &str = "An error occurred";

/// Shown when a delete succeeds without a server message.
pub const DELETE_SUCCESS_MESSAGE: &str = "Delete succeeded";

/// Shown when a delete fails without a server message.
pub const DELETE_FAILURE_MESSAGE: &str = "Delete failed.";

/// The services an [`EntityPage`] depends on.
#[derive(Clone)]
pub struct PageServices {
    pub data: Arc<dyn DataService>,
    pub notifier: Arc<dyn Notifier>,
    pub confirmer: Arc<dyn Confirmer>,
    pub navigator: Arc<dyn Navigator>,
}

/// A row action raised by the table, waiting to be handled.
#[derive(Debug, Clone)]
pub enum PageEvent {
    View(Record),
    Edit(Record),
    Delete(Record),
}

/// How a delete request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation.
    Cancelled,
    /// The server deleted the record and it was removed locally.
    Deleted,
    /// The server refused or the request failed; nothing changed.
    Failed,
}

/// Controller for one resource's list page.
///
/// The table's row callbacks only queue a [`PageEvent`]; the page handles
/// queued events one at a time in [`process_events`](Self::process_events),
/// so no two handlers ever touch the collection at once.
///
/// # Example
///
/// ```ignore
/// let mut page = EntityPage::for_resource(Resource::Article, services);
/// page.load().await;
/// page.trigger(Action::Delete, 0).await;
/// ```
pub struct EntityPage {
    definition: PageDefinition,
    services: PageServices,
    table: TableView,
    events: mpsc::UnboundedReceiver<PageEvent>,
}

impl EntityPage {
    /// Creates a page with the given layout and an empty collection.
    pub fn new(definition: PageDefinition, services: PageServices) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let view_tx = tx.clone();
        let edit_tx = tx.clone();
        let delete_tx = tx;

        let table = definition
            .table()
            .on_view(move |record| {
                let _ = view_tx.send(PageEvent::View(record.clone()));
            })
            .on_edit(move |record| {
                let _ = edit_tx.send(PageEvent::Edit(record.clone()));
            })
            .on_delete(move |record| {
                let _ = delete_tx.send(PageEvent::Delete(record.clone()));
            });

        Self {
            definition,
            services,
            table,
            events,
        }
    }

    /// Creates the standard page for a resource.
    pub fn for_resource(resource: Resource, services: PageServices) -> Self {
        Self::new(PageDefinition::for_resource(resource), services)
    }

    pub fn definition(&self) -> &PageDefinition {
        &self.definition
    }

    pub fn resource(&self) -> Resource {
        self.definition.resource
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Mutable access for search, sort and paging input.
    pub fn table_mut(&mut self) -> &mut TableView {
        &mut self.table
    }

    pub fn records(&self) -> &[Record] {
        self.table.records()
    }

    /// Fetches the collection.
    ///
    /// On failure the current collection is kept and the error is
    /// reported. Returns `true` on success.
    pub async fn load(&mut self) -> bool {
        let resource = self.resource();
        self.table.set_loading(true);

        let envelope = self.services.data.list(resource).await;
        let success = envelope.success;
        if success {
            self.services.notifier.success(&envelope.message);
            let records = envelope.into_data().unwrap_or_default();
            log::debug!("Loaded {} {} records", records.len(), resource);
            self.table.set_records(records);
        } else {
            self.services.notifier.error(envelope.message_or(LOAD_ERROR_MESSAGE));
        }

        self.table.set_loading(false);
        success
    }

    /// Triggers a row action on the current page and handles it.
    ///
    /// Returns `false` if the row does not exist.
    pub async fn trigger(&mut self, action: Action, row: usize) -> bool {
        if !self.table.trigger(action, row) {
            return false;
        }
        self.process_events().await;
        true
    }

    /// Triggers a row action on the record with the given id and handles it.
    pub async fn trigger_for_id(&mut self, action: Action, id: &str) -> bool {
        if !self.table.trigger_for_id(action, id) {
            return false;
        }
        self.process_events().await;
        true
    }

    /// Handles every queued row action, in order. Returns how many ran.
    pub async fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            match event {
                PageEvent::View(record) => {
                    self.view(&record);
                }
                PageEvent::Edit(record) => {
                    self.edit(&record);
                }
                PageEvent::Delete(record) => {
                    self.delete(&record).await;
                }
            }
            handled += 1;
        }
        handled
    }

    /// Navigates to the record's detail page.
    pub fn view(&self, record: &Record) -> bool {
        self.navigate(record, Resource::view_route)
    }

    /// Navigates to the record's edit page.
    pub fn edit(&self, record: &Record) -> bool {
        self.navigate(record, Resource::edit_route)
    }

    fn navigate(&self, record: &Record, route: fn(Resource, &str) -> String) -> bool {
        match record.require_id() {
            Ok(id) => {
                self.services.navigator.push(&route(self.resource(), &id));
                true
            }
            Err(e) => {
                log::warn!("Cannot navigate: {}", e);
                false
            }
        }
    }

    /// Asks for confirmation, then deletes the record.
    ///
    /// A successful delete removes the record from the local collection
    /// without re-fetching.
    pub async fn delete(&mut self, record: &Record) -> DeleteOutcome {
        let id = match record.require_id() {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Cannot delete: {}", e);
                self.services.notifier.error(DELETE_FAILURE_MESSAGE);
                return DeleteOutcome::Failed;
            }
        };

        let dialog = self.definition.delete_dialog(record);
        if !self.services.confirmer.confirm(&dialog).await {
            log::debug!("Delete of {} {} cancelled", self.resource(), id);
            return DeleteOutcome::Cancelled;
        }

        let envelope = self.services.data.delete(self.resource(), &id).await;
        if envelope.success {
            self.table.remove_by_id(&id);
            self.services
                .notifier
                .success(envelope.message_or(DELETE_SUCCESS_MESSAGE));
            DeleteOutcome::Deleted
        } else {
            self.services
                .notifier
                .error(envelope.message_or(DELETE_FAILURE_MESSAGE));
            DeleteOutcome::Failed
        }
    }
}
