//! Process lock serializing device sessions between keylight instances

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::debug;

/// Guard that holds the lock file open. Lock is released when dropped.
pub struct Lock {
    _file: File,
}

impl Lock {
    /// Acquire an exclusive lock on the device, waiting for any other
    /// instance that is currently drawing.
    pub fn acquire() -> io::Result<Self> {
        let path = Self::path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine lock file path",
            )
        })?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // The file is never removed, so every instance locks the same inode
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        if file.try_lock().is_err() {
            debug!(path = %path.display(), "waiting for another instance");
            file.lock()?;
        }

        Ok(Self { _file: file })
    }

    /// Get the lock file path
    fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "keylight").map(|dirs| dirs.config_dir().join("keylight.lock"))
    }
}
