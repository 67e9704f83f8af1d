use std::convert::Infallible;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use warp::reply::Json;
use warp::Filter;

use crate::directory::{InMemoryPatientDirectory, PatientDirectory, PatientRecord};
use crate::monitor::{MonitorError, VitalSignMonitor};
use crate::vitals::BloodPressure;

#[derive(Debug, Serialize, Deserialize)]
pub struct BloodPressureRequest {
    pub systolic: u16,
    pub diastolic: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemperatureRequest {
    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    fn success(message: &str, data: Option<serde_json::Value>) -> Self {
        ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data,
        }
    }

    fn error(message: &str) -> Self {
        ApiResponse {
            status: "error".to_string(),
            message: message.to_string(),
            data: None,
        }
    }
}

pub struct RestApi {
    monitor: Arc<VitalSignMonitor>,
    directory: Arc<InMemoryPatientDirectory>,
}

impl RestApi {
    pub fn new(monitor: Arc<VitalSignMonitor>, directory: Arc<InMemoryPatientDirectory>) -> Self {
        RestApi { monitor, directory }
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        self.register_patient()
            .or(self.get_patient())
            .or(self.check_blood_pressure())
            .or(self.check_temperature())
    }

    fn register_patient(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let directory = Arc::clone(&self.directory);

        warp::path!("patients")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |record: PatientRecord| {
                let directory = Arc::clone(&directory);
                async move {
                    let id = record.id.clone();
                    directory.insert(record);

                    tracing::info!("registered patient record {}", id);

                    let response = ApiResponse::success("Patient registered", None);
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn get_patient(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let directory = Arc::clone(&self.directory);

        warp::path!("patients" / String)
            .and(warp::get())
            .and_then(move |patient_id: String| {
                let directory = Arc::clone(&directory);
                async move {
                    let response = match directory.lookup(&patient_id) {
                        Ok(record) => ApiResponse::success(
                            "Patient found",
                            Some(serde_json::to_value(record).unwrap()),
                        ),
                        Err(_) => {
                            ApiResponse::error(&format!("No patient record for id: {}", patient_id))
                        }
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn check_blood_pressure(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let monitor = Arc::clone(&self.monitor);

        warp::path!("vitals" / String / "blood-pressure")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |patient_id: String, body: BloodPressureRequest| {
                let monitor = Arc::clone(&monitor);
                async move {
                    let observed = BloodPressure::new(body.systolic, body.diastolic);
                    let response = match monitor.check_blood_pressure(&patient_id, observed) {
                        Ok(()) => ApiResponse::success("Blood pressure reading checked", None),
                        Err(MonitorError::PatientNotFound(id)) => {
                            ApiResponse::error(&format!("No patient record for id: {}", id))
                        }
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn check_temperature(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let monitor = Arc::clone(&self.monitor);

        warp::path!("vitals" / String / "temperature")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |patient_id: String, body: TemperatureRequest| {
                let monitor = Arc::clone(&monitor);
                async move {
                    let response = match monitor.check_temperature(&patient_id, body.value) {
                        Ok(()) => ApiResponse::success("Temperature reading checked", None),
                        Err(MonitorError::PatientNotFound(id)) => {
                            ApiResponse::error(&format!("No patient record for id: {}", id))
                        }
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::RecordingAlertSender;
    use crate::directory::HealthBaseline;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn patient_one() -> PatientRecord {
        PatientRecord {
            id: "1".to_string(),
            first_name: "Koly".to_string(),
            last_name: "Petrov".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            baseline: HealthBaseline {
                normal_temperature: 36.6,
                normal_blood_pressure: BloodPressure::new(120, 80),
            },
        }
    }

    fn api_with_patient_one() -> (RestApi, Arc<RecordingAlertSender>) {
        let directory = Arc::new(InMemoryPatientDirectory::new());
        directory.insert(patient_one());

        let alerter = Arc::new(RecordingAlertSender::new());
        let monitor = Arc::new(VitalSignMonitor::new(directory.clone(), alerter.clone()));

        (RestApi::new(monitor, directory), alerter)
    }

    #[tokio::test]
    async fn temperature_check_fires_alert_through_api() {
        let (api, alerter) = api_with_patient_one();

        let res = warp::test::request()
            .method("POST")
            .path("/vitals/1/temperature")
            .json(&TemperatureRequest { value: 38.0 })
            .reply(&api.routes())
            .await;

        assert_eq!(res.status(), 200);
        let body: ApiResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.status, "success");
        assert_eq!(alerter.sent_count(), 1);
    }

    #[tokio::test]
    async fn blood_pressure_check_for_unknown_patient_reports_error() {
        let (api, alerter) = api_with_patient_one();

        let res = warp::test::request()
            .method("POST")
            .path("/vitals/42/blood-pressure")
            .json(&BloodPressureRequest {
                systolic: 120,
                diastolic: 80,
            })
            .reply(&api.routes())
            .await;

        assert_eq!(res.status(), 200);
        let body: ApiResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.status, "error");
        assert_eq!(alerter.sent_count(), 0);
    }

    #[tokio::test]
    async fn register_then_fetch_patient() {
        let (api, _) = api_with_patient_one();

        let mut record = patient_one();
        record.id = "9".to_string();

        let res = warp::test::request()
            .method("POST")
            .path("/patients")
            .json(&record)
            .reply(&api.routes())
            .await;
        assert_eq!(res.status(), 200);

        let res = warp::test::request()
            .method("GET")
            .path("/patients/9")
            .reply(&api.routes())
            .await;

        let body: ApiResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.status, "success");
        assert!(body.data.is_some());
    }
}
