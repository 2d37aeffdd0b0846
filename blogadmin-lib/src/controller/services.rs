//! Services a page controller talks to

use std::sync::PoisonError;
use std::sync::RwLock;

use async_trait::async_trait;

/// Shows transient success and error messages.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// A confirmation dialog.
///
/// # Example
///
/// ```
/// use blogadmin_lib::controller::ConfirmDialog;
///
/// let dialog = ConfirmDialog::new("Delete this item?").title("Warning");
/// assert_eq!(dialog.confirm_text, "Delete");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl ConfirmDialog {
    /// Creates a dialog with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: "Confirm".into(),
            message: message.into(),
            confirm_text: "Delete".into(),
            cancel_text: "Cancel".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }
}

/// Asks the user to confirm a destructive action.
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Returns `true` if the user confirmed.
    async fn confirm(&self, dialog: &ConfirmDialog) -> bool;
}

/// Moves between admin pages.
pub trait Navigator: Send + Sync {
    /// The path currently shown.
    fn current_path(&self) -> String;

    /// Navigates to `path`.
    fn push(&self, path: &str);
}

/// A [`Navigator`] that only records the history.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: RwLock<Vec<String>>,
}

impl MemoryNavigator {
    /// Creates a navigator positioned at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            history: RwLock::new(vec![path.into()]),
        }
    }

    /// Every path visited, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, path: &str) {
        log::debug!("Navigating to {}", path);
        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_navigator_tracks_history() {
        let nav = MemoryNavigator::new("/admin/articles");
        nav.push("/admin/articles/7");

        assert_eq!(nav.current_path(), "/admin/articles/7");
        assert_eq!(nav.history(), ["/admin/articles", "/admin/articles/7"]);
    }
}
