//! Error definitions

use thiserror::Error;

use crate::config::ConfigError;
use crate::directory::DirectoryError;
use crate::monitor::MonitorError;

/// Top-level error for the service binary and API layer
#[derive(Error, Debug)]
pub enum VitalError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
    #[error("monitor error: {0}")]
    Monitor(#[from] MonitorError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_module_errors_with_context() {
        let err = VitalError::from(DirectoryError::NotFound("1".to_string()));
        assert_eq!(err.to_string(), "directory error: no patient record for id: 1");

        let err = VitalError::from(MonitorError::PatientNotFound("1".to_string()));
        assert_eq!(err.to_string(), "monitor error: no patient record for id: 1");
    }
}
