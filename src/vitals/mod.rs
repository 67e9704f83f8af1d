//! Vital-sign value types
//!
//! This module contains the core vital-sign value types that
//! VitalWatch compares against patient baselines.

use serde::{Deserialize, Serialize};

/// A blood pressure reading with systolic and diastolic components
///
/// Equality is structural: two readings are equal only when both
/// components match exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: u16,  // The higher number, in mmHg
    pub diastolic: u16, // The lower number, in mmHg
}

impl BloodPressure {
    pub fn new(systolic: u16, diastolic: u16) -> Self {
        BloodPressure {
            systolic,
            diastolic,
        }
    }
}

impl std::fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// A freshly observed vital sign to be checked against a baseline
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reading", rename_all = "snake_case")]
pub enum VitalReading {
    /// Blood pressure with systolic/diastolic components
    BloodPressure(BloodPressure),
    /// Body temperature in degrees Celsius
    Temperature(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blood_pressure_equality_is_structural() {
        assert_eq!(BloodPressure::new(120, 80), BloodPressure::new(120, 80));
        assert_ne!(BloodPressure::new(120, 80), BloodPressure::new(130, 80));
        assert_ne!(BloodPressure::new(120, 80), BloodPressure::new(120, 90));
    }

    #[test]
    fn blood_pressure_displays_as_pair() {
        assert_eq!(BloodPressure::new(120, 80).to_string(), "120/80");
    }
}
