//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "blogadmin";
const APPLICATION: &str = "blogadmin";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory for the session store.
///
/// - Linux: `$XDG_DATA_HOME/blogadmin` or `~/.local/share/blogadmin`
/// - macOS: `~/Library/Application Support/dev.blogadmin.blogadmin`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/blogadmin` or `~/.cache/blogadmin`
/// - macOS: `~/Library/Caches/dev.blogadmin.blogadmin`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// The sqlite file holding the bearer token and redirect target.
pub fn storage_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("storage.db"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archives `latest.log` under a timestamp and prunes old archives.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache, &chrono::Local::now().format("%Y%m%d_%H%M%S").to_string());
}

fn rotate_logs_in(dir: &Path, timestamp: &str) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(format!("{}.log", timestamp)));
    }
    prune_logs(dir, MAX_OLD_LOGS);
}

fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Archive names sort chronologically
    archived.sort_by_key(|e| e.file_name());

    if archived.len() > keep {
        for entry in archived.iter().take(archived.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}
