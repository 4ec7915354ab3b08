//! Tracks temporary user-data directories created for browser instances and removes
//! them on shutdown, working around Chromium's tendency to hold a lock on
//! `CrashpadMetrics-active.pma` a little past process exit.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;
use tracing::warn;

const LOCKED_FILE_RETRY_ATTEMPTS: u32 = 10;
const LOCKED_FILE_RETRY_DELAY: Duration = Duration::from_millis(100);
const KNOWN_LOCKED_FILES: &[&str] = &["CrashpadMetrics-active.pma"];

#[derive(Default)]
pub struct TempDirManager {
    dirs: Vec<TempDir>,
}

impl TempDirManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self) -> std::io::Result<PathBuf> {
        let dir = TempDir::new()?;
        let path = dir.path().to_path_buf();
        self.dirs.push(dir);
        Ok(path)
    }

    /// Removes every directory this manager created, retrying deletions that fail
    /// because Chromium still has a handle open on a known file.
    pub async fn cleanup(&mut self) {
        for dir in self.dirs.drain(..) {
            let path = dir.into_path();
            if let Err(err) = remove_dir_with_retry(&path).await {
                warn!("failed to remove temp profile dir {}: {err}", path.display());
            }
        }
    }

    pub fn active_dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(|d| d.path())
    }
}

async fn remove_dir_with_retry(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(_) => retry_locked_files(path).await,
    }
}

/// Walks the tree a second time, retrying individual file removals that hit a
/// permission error (Chromium still holding the file open) before falling back to a
/// final `remove_dir_all`.
async fn retry_locked_files(path: &Path) -> std::io::Result<()> {
    for known in KNOWN_LOCKED_FILES {
        let candidate = find_file(path, known).await;
        if let Some(candidate) = candidate {
            let mut attempt = 0;
            loop {
                match tokio::fs::remove_file(&candidate).await {
                    Ok(()) | Err(_) if attempt >= LOCKED_FILE_RETRY_ATTEMPTS => break,
                    Ok(()) => break,
                    Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                        attempt += 1;
                        tokio::time::sleep(LOCKED_FILE_RETRY_DELAY).await;
                    }
                    Err(_) => break,
                }
            }
        }
    }
    tokio::fs::remove_dir_all(path).await
}

async fn find_file(root: &Path, name: &str) -> Option<PathBuf> {
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let mut entries = tokio::fs::read_dir(&dir).await.ok()?;
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if path.file_name().map(|n| n == name).unwrap_or(false) {
                return Some(path);
            }
            if path.is_dir() {
                stack.push(path);
            }
        }
    }
    None
}
