//! Vital-sign monitoring
//!
//! The decision core of VitalWatch:
//! - Fetches the patient's baseline from the directory
//! - Compares the observed reading against it
//! - Hands at most one alert per check to the sender

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alert::AlertSender;
use crate::directory::{DirectoryError, PatientDirectory, PatientRecord};
use crate::vitals::{BloodPressure, VitalReading};

/// Tolerances applied when comparing a temperature against a baseline
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceConfig {
    /// Degrees Celsius a reading may fall below baseline before alerting
    pub temperature_drop: f64,
    /// Absolute temperature at or above which a reading always alerts
    pub fever_threshold: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        ToleranceConfig {
            temperature_drop: 1.5,
            fever_threshold: 37.0,
        }
    }
}

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("no patient record for id: {0}")]
    PatientNotFound(String),
}

impl From<DirectoryError> for MonitorError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::NotFound(id) => MonitorError::PatientNotFound(id),
        }
    }
}

/// Stateless checker for freshly observed vital signs
///
/// Each check is a single pass: one directory lookup, one comparison,
/// at most one alert. Nothing is retained between calls.
pub struct VitalSignMonitor {
    directory: Arc<dyn PatientDirectory>,
    alerter: Arc<dyn AlertSender>,
    tolerances: ToleranceConfig,
}

impl VitalSignMonitor {
    pub fn new(directory: Arc<dyn PatientDirectory>, alerter: Arc<dyn AlertSender>) -> Self {
        Self::with_tolerances(directory, alerter, ToleranceConfig::default())
    }

    pub fn with_tolerances(
        directory: Arc<dyn PatientDirectory>,
        alerter: Arc<dyn AlertSender>,
        tolerances: ToleranceConfig,
    ) -> Self {
        VitalSignMonitor {
            directory,
            alerter,
            tolerances,
        }
    }

    /// Check an observed blood pressure against the patient's baseline
    ///
    /// Any mismatch in either component counts as abnormal.
    pub fn check_blood_pressure(
        &self,
        patient_id: &str,
        observed: BloodPressure,
    ) -> Result<(), MonitorError> {
        let record = self.directory.lookup(patient_id)?;

        if observed != record.baseline.normal_blood_pressure {
            tracing::debug!(
                "blood pressure {} outside baseline {} for patient {}",
                observed,
                record.baseline.normal_blood_pressure,
                record.id
            );
            self.alert(&record);
        }

        Ok(())
    }

    /// Check an observed temperature (°C) against the patient's baseline
    ///
    /// A reading is abnormal when it falls more than `temperature_drop`
    /// degrees below the baseline, or reaches `fever_threshold`.
    pub fn check_temperature(&self, patient_id: &str, observed: f64) -> Result<(), MonitorError> {
        let record = self.directory.lookup(patient_id)?;
        let baseline = record.baseline.normal_temperature;

        let too_low = baseline - observed > self.tolerances.temperature_drop;
        let feverish = observed >= self.tolerances.fever_threshold;

        if too_low || feverish {
            tracing::debug!(
                "temperature {} outside tolerance of baseline {} for patient {}",
                observed,
                baseline,
                record.id
            );
            self.alert(&record);
        }

        Ok(())
    }

    /// Dispatch a reading to the matching check
    pub fn check(&self, patient_id: &str, reading: VitalReading) -> Result<(), MonitorError> {
        match reading {
            VitalReading::BloodPressure(observed) => self.check_blood_pressure(patient_id, observed),
            VitalReading::Temperature(observed) => self.check_temperature(patient_id, observed),
        }
    }

    fn alert(&self, record: &PatientRecord) {
        let message = format!("Warning, patient with id: {}, need help", record.id);
        self.alerter.send(&message);
    }
}
