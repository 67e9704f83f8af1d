//! VitalWatch: a patient vital-signs monitoring service
//!
//! VitalWatch compares observed blood pressure and temperature readings
//! against each patient's stored baseline and raises an alert when a
//! reading falls outside tolerance.

pub mod alert;
pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod monitor;
pub mod vitals;

pub use alert::{AlertSender, LogAlertSender};
pub use directory::{HealthBaseline, InMemoryPatientDirectory, PatientDirectory, PatientRecord};
pub use error::VitalError;
pub use monitor::{MonitorError, ToleranceConfig, VitalSignMonitor};
pub use vitals::{BloodPressure, VitalReading};
