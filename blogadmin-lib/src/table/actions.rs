//! Per-row actions and the callbacks behind them

use std::fmt;
use std::sync::Arc;

use crate::model::Record;

/// Callback invoked with the record a row action was triggered on.
pub type Callback = Arc<dyn Fn(&Record) + Send + Sync>;

/// A per-row action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Edit,
    Delete,
}

impl Action {
    /// Render order of the controls.
    pub const ALL: [Action; 3] = [Action::View, Action::Edit, Action::Delete];
}

/// Which row actions are available.
///
/// Computed once per render from the supplied callbacks; a missing callback
/// means a missing control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet {
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl ActionSet {
    pub fn contains(&self, action: Action) -> bool {
        match action {
            Action::View => self.view,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.view || self.edit || self.delete)
    }

    /// Iterates the available actions in render order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

/// Optional view / edit / delete callbacks.
#[derive(Clone, Default)]
pub struct RowActions {
    pub on_view: Option<Callback>,
    pub on_edit: Option<Callback>,
    pub on_delete: Option<Callback>,
}

impl RowActions {
    pub fn capabilities(&self) -> ActionSet {
        ActionSet {
            view: self.on_view.is_some(),
            edit: self.on_edit.is_some(),
            delete: self.on_delete.is_some(),
        }
    }

    fn callback(&self, action: Action) -> Option<&Callback> {
        match action {
            Action::View => self.on_view.as_ref(),
            Action::Edit => self.on_edit.as_ref(),
            Action::Delete => self.on_delete.as_ref(),
        }
    }

    /// Invokes the callback for `action`. Returns `false` if none is set.
    pub fn dispatch(&self, action: Action, record: &Record) -> bool {
        match self.callback(action) {
            Some(callback) => {
                callback(record);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for RowActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RowActions").field(&self.capabilities()).finish()
    }
}
