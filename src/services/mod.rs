//! Service layer for FleetLog
//!
//! The service layer provides the business rules on top of the storage
//! layer: the vehicle registry (odometer state), the usage recorder
//! (carry-forward and validation), and the service alert evaluator.

pub mod alerts;
pub mod recorder;
pub mod registry;

pub use alerts::{ServiceAlert, ServiceAlertEvaluator};
pub use recorder::{CreateUsageInput, UsageRecorder};
pub use registry::VehicleRegistry;
