//! Patient directory
//!
//! Handles patient record lookup for the monitor, including:
//! - The `PatientDirectory` capability the monitor consumes
//! - An in-memory directory implementation for the service binary and tests

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vitals::BloodPressure;

/// A patient's normal reference values, established at admission
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthBaseline {
    pub normal_temperature: f64, // degrees Celsius
    pub normal_blood_pressure: BloodPressure,
}

/// A stored patient record
///
/// Records are created and owned by the directory; the monitor only
/// reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub baseline: HealthBaseline,
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("no patient record for id: {0}")]
    NotFound(String),
}

/// Lookup capability consumed by the monitor
pub trait PatientDirectory: Send + Sync {
    fn lookup(&self, id: &str) -> Result<PatientRecord, DirectoryError>;
}

/// In-memory patient directory keyed by patient id
#[derive(Debug, Default)]
pub struct InMemoryPatientDirectory {
    records: RwLock<HashMap<String, PatientRecord>>,
}

impl InMemoryPatientDirectory {
    pub fn new() -> Self {
        InMemoryPatientDirectory {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Register a record, replacing any existing record with the same id
    pub fn insert(&self, record: PatientRecord) {
        let mut records = self.records.write().unwrap();
        records.insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

impl PatientDirectory for InMemoryPatientDirectory {
    fn lookup(&self, id: &str) -> Result<PatientRecord, DirectoryError> {
        let records = self.records.read().unwrap();
        records
            .get(id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }
}
