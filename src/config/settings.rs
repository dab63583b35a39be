//! Session settings store
//!
//! Resolves configurable thresholds from the persisted key/value settings
//! table once per session. Malformed or missing values never fail here:
//! alerting degrades to the built-in defaults rather than blocking usage
//! recording, which does not depend on this store at all.

use crate::storage::Storage;

/// Settings key for the service interval threshold
pub const SERVICE_INTERVAL_KEY: &str = "SERVICE_INTERVAL_KM";

/// Settings key for the daily trip distance limit
pub const DAILY_TRIP_LIMIT_KEY: &str = "DAILY_TRIP_LIMIT_KM";

/// Built-in default service interval in kilometers
pub const DEFAULT_SERVICE_INTERVAL_KM: u32 = 10_000;

/// Built-in default daily trip limit in kilometers
pub const DEFAULT_DAILY_TRIP_LIMIT_KM: u32 = 1_000;

/// Thresholds resolved from the settings table, loaded once per session.
///
/// A separate administrative path (`fleetlog settings set`) may rewrite the
/// table; the new values are observed on the next load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsStore {
    service_interval_km: u32,
    daily_trip_limit_km: u32,
}

impl SettingsStore {
    /// Load thresholds from the settings table.
    ///
    /// Absent, non-numeric, or non-positive values fall back to the
    /// built-in defaults.
    pub fn load(storage: &Storage) -> Self {
        Self {
            service_interval_km: resolve(
                storage.settings.get(SERVICE_INTERVAL_KEY),
                DEFAULT_SERVICE_INTERVAL_KM,
            ),
            daily_trip_limit_km: resolve(
                storage.settings.get(DAILY_TRIP_LIMIT_KEY),
                DEFAULT_DAILY_TRIP_LIMIT_KM,
            ),
        }
    }

    /// Construct a store with explicit values (useful for testing)
    pub fn with_values(service_interval_km: u32, daily_trip_limit_km: u32) -> Self {
        Self {
            service_interval_km,
            daily_trip_limit_km,
        }
    }

    /// Distance threshold after which a vehicle is flagged for service
    pub fn service_interval_km(&self) -> u32 {
        self.service_interval_km
    }

    /// Distance above which a single trip is flagged as unusually long
    pub fn daily_trip_limit_km(&self) -> u32 {
        self.daily_trip_limit_km
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::with_values(DEFAULT_SERVICE_INTERVAL_KM, DEFAULT_DAILY_TRIP_LIMIT_KM)
    }
}

/// Parse a raw setting value, substituting the default for absent,
/// non-numeric, or non-positive input.
fn resolve(raw: Option<String>, default: u32) -> u32 {
    match raw.as_deref().map(str::trim) {
        Some(s) => match s.parse::<i64>() {
            Ok(v) if v > 0 && v <= u32::MAX as i64 => v as u32,
            _ => default,
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FleetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_defaults_when_table_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = SettingsStore::load(&storage);
        assert_eq!(settings.service_interval_km(), 10_000);
        assert_eq!(settings.daily_trip_limit_km(), 1_000);
    }

    #[test]
    fn test_configured_value() {
        let (_temp_dir, storage) = create_test_storage();
        storage.settings.set(SERVICE_INTERVAL_KEY, "15000").unwrap();

        let settings = SettingsStore::load(&storage);
        assert_eq!(settings.service_interval_km(), 15_000);
    }

    #[test]
    fn test_default_on_invalid_values() {
        let (_temp_dir, storage) = create_test_storage();

        for bad in ["0", "-500", "soon", "", "  ", "10.5"] {
            storage.settings.set(SERVICE_INTERVAL_KEY, bad).unwrap();
            let settings = SettingsStore::load(&storage);
            assert_eq!(
                settings.service_interval_km(),
                10_000,
                "value {:?} should fall back to the default",
                bad
            );
        }
    }

    #[test]
    fn test_whitespace_tolerated() {
        let (_temp_dir, storage) = create_test_storage();
        storage.settings.set(SERVICE_INTERVAL_KEY, " 8000 ").unwrap();

        let settings = SettingsStore::load(&storage);
        assert_eq!(settings.service_interval_km(), 8_000);
    }
}
