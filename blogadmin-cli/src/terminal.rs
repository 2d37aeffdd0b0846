//! Terminal implementations of the page services

use std::io::Write;
use std::sync::PoisonError;
use std::sync::RwLock;

use async_trait::async_trait;
use blogadmin_lib::controller::ConfirmDialog;
use blogadmin_lib::controller::Confirmer;
use blogadmin_lib::controller::Navigator;
use blogadmin_lib::controller::Notifier;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;

/// Prints notifications to stderr and mirrors them into the log.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        log::info!("{}", message);
        if !message.is_empty() {
            eprintln!("✓ {}", message);
        }
    }

    fn error(&self, message: &str) {
        log::warn!("{}", message);
        eprintln!("✗ {}", message);
    }
}

/// Asks on stdin; anything but `y`/`yes` declines.
pub struct StdinConfirmer {
    /// Skip the prompt and confirm.
    pub assume_yes: bool,
}

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, dialog: &ConfirmDialog) -> bool {
        if self.assume_yes {
            return true;
        }

        eprintln!("{}", dialog.title);
        eprint!(
            "{} [y = {}, N = {}] ",
            dialog.message, dialog.confirm_text, dialog.cancel_text
        );
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut line).await {
            Ok(_) => is_yes(&line),
            Err(e) => {
                log::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Records where the user would be sent and tells them.
pub struct TerminalNavigator {
    current: RwLock<String>,
}

impl TerminalNavigator {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(path.into()),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn current_path(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, path: &str) {
        log::debug!("Navigating to {}", path);
        eprintln!("→ {}", path);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = path.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn test_navigator_tracks_current() {
        let nav = TerminalNavigator::new("/admin/users");
        nav.push("/login");
        assert_eq!(nav.current_path(), "/login");
    }
}
