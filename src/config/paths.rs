//! Path management for FleetLog
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `FLEETLOG_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fleetlog` or `~/.config/fleetlog`
//! 3. Windows: `%APPDATA%\fleetlog`

use std::path::PathBuf;

use crate::error::FleetError;

/// Manages all paths used by FleetLog
#[derive(Debug, Clone)]
pub struct FleetPaths {
    /// Base directory for all FleetLog data
    base_dir: PathBuf,
}

impl FleetPaths {
    /// Create a new FleetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FleetError> {
        let base_dir = if let Ok(custom) = std::env::var("FLEETLOG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FleetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fleetlog/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/fleetlog/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to vehicles.json
    pub fn vehicles_file(&self) -> PathBuf {
        self.data_dir().join("vehicles.json")
    }

    /// Get the path to usage_log.json
    pub fn usage_log_file(&self) -> PathBuf {
        self.data_dir().join("usage_log.json")
    }

    /// Get the path to settings.json (the key/value settings table)
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    /// Get the path to the store lock file guarding usage recording
    pub fn lock_file(&self) -> PathBuf {
        self.data_dir().join(".fleetlog.lock")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FleetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FleetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FleetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if FleetLog has been initialized (vehicles table exists)
    pub fn is_initialized(&self) -> bool {
        self.vehicles_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FleetError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("fleetlog"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FleetError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FleetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fleetlog"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.vehicles_file(),
            temp_dir.path().join("data").join("vehicles.json")
        );
        assert_eq!(
            paths.usage_log_file(),
            temp_dir.path().join("data").join("usage_log.json")
        );
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("data").join("settings.json")
        );
    }
}
