//! Usage record model
//!
//! A single trip in the logbook. Records are immutable once persisted; the
//! usage log is append-only and offers no edit or delete path.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{UsageRecordId, VehicleId};

/// Marker set on a record whose trip distance exceeds the daily limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripFlag {
    /// Single trip longer than the configured daily limit
    DailyHigh,
}

impl fmt::Display for TripFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DailyHigh => write!(f, "DAILY_HIGH"),
        }
    }
}

/// A single usage (trip) entry in the logbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Unique identifier
    pub id: UsageRecordId,

    /// The vehicle this trip belongs to
    pub vehicle_id: VehicleId,

    /// Odometer at the start of the trip (carried forward from the vehicle)
    pub odo_start_km: u32,

    /// Odometer at the end of the trip
    pub odo_end_km: u32,

    /// Trip date
    pub date: NaiveDate,

    /// Driver name (opaque to the business rules)
    #[serde(default)]
    pub driver: String,

    /// Trip purpose (opaque to the business rules)
    #[serde(default)]
    pub purpose: String,

    /// Anomaly flag, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<TripFlag>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl UsageRecord {
    /// Create a new usage record.
    ///
    /// Callers are expected to have resolved `odo_start_km` through the
    /// carry-forward rule; this constructor only fixes the shape.
    pub fn new(
        vehicle_id: VehicleId,
        odo_start_km: u32,
        odo_end_km: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: UsageRecordId::new(),
            vehicle_id,
            odo_start_km,
            odo_end_km,
            date,
            driver: String::new(),
            purpose: String::new(),
            flag: None,
            created_at: Utc::now(),
        }
    }

    /// Trip distance in kilometers
    pub fn distance_km(&self) -> u32 {
        self.odo_end_km.saturating_sub(self.odo_start_km)
    }

    /// Validate the odometer ordering invariant
    pub fn validate(&self) -> Result<(), UsageValidationError> {
        if self.odo_end_km < self.odo_start_km {
            return Err(UsageValidationError::EndBeforeStart {
                odo_start_km: self.odo_start_km,
                odo_end_km: self.odo_end_km,
            });
        }
        Ok(())
    }
}

impl fmt::Display for UsageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} km ({} km)",
            self.date.format("%Y-%m-%d"),
            self.odo_start_km,
            self.odo_end_km,
            self.distance_km()
        )
    }
}

/// Validation errors for usage records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageValidationError {
    EndBeforeStart { odo_start_km: u32, odo_end_km: u32 },
}

impl fmt::Display for UsageValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart {
                odo_start_km,
                odo_end_km,
            } => write!(
                f,
                "Ending odometer ({} km) cannot be below starting odometer ({} km)",
                odo_end_km, odo_start_km
            ),
        }
    }
}

impl std::error::Error for UsageValidationError {}
