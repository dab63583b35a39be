//! Exclusive store lock
//!
//! The data files may be shared between sessions. Usage recording is a
//! read-modify-write sequence (read odometer, append record, advance
//! odometer) and must not interleave with another writer, so the sequence
//! runs under an exclusive lock file. The guard releases the lock on every
//! exit path, including panics and early error returns.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::FleetError;

/// How long to wait for a competing session before giving up
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Delay between acquisition attempts
const RETRY_INTERVAL: Duration = Duration::from_millis(50);

/// RAII guard for the store lock file. Dropping the guard releases the lock.
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
}

impl StoreLock {
    /// Acquire the lock, retrying until the default timeout elapses.
    pub fn acquire(path: PathBuf) -> Result<Self, FleetError> {
        Self::acquire_with_timeout(path, ACQUIRE_TIMEOUT)
    }

    /// Acquire the lock with an explicit timeout.
    pub fn acquire_with_timeout(path: PathBuf, timeout: Duration) -> Result<Self, FleetError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| FleetError::Persist(format!("Failed to create lock directory: {}", e)))?;
        }

        let deadline = Instant::now() + timeout;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    // Record the holder for diagnostics; failure here is harmless
                    let _ = write!(file, "{}", std::process::id());
                    return Ok(Self { path });
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    if Instant::now() >= deadline {
                        return Err(FleetError::Persist(format!(
                            "Store is locked by another session ({})",
                            path.display()
                        )));
                    }
                    thread::sleep(RETRY_INTERVAL);
                }
                Err(e) => {
                    return Err(FleetError::Persist(format!(
                        "Failed to acquire store lock {}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_acquire_and_release() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".lock");

        let lock = StoreLock::acquire(path.clone()).unwrap();
        assert!(path.exists());

        drop(lock);
        assert!(!path.exists());
    }

    #[test]
    fn test_contended_lock_times_out() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".lock");

        let _held = StoreLock::acquire(path.clone()).unwrap();
        let result = StoreLock::acquire_with_timeout(path, Duration::from_millis(120));
        assert!(matches!(result, Err(FleetError::Persist(_))));
    }

    #[test]
    fn test_reacquire_after_release() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".lock");

        drop(StoreLock::acquire(path.clone()).unwrap());
        let second = StoreLock::acquire(path.clone());
        assert!(second.is_ok());
    }
}
