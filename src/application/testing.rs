// Scripted backend used by the panel and dashboard tests
use crate::application::dashboard_api::DashboardApi;
use crate::domain::crime::{CrimeIncident, Severity};
use crate::domain::event::LocalEvent;
use crate::domain::transport::TransitVehicle;
use crate::domain::weather::WeatherResponse;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

fn unavailable<T>() -> ApiResult<T> {
    Err(ApiError::Status(503, "unavailable".to_string()))
}

#[derive(Default)]
pub struct ScriptedApi {
    /// Raw JSON body for the weather endpoint; `None` fails the request.
    pub weather_body: Mutex<Option<String>>,
    pub crime: Mutex<Option<Vec<CrimeIncident>>>,
    pub events: Mutex<Option<Vec<LocalEvent>>>,
    /// Labels without an entry fail the request.
    pub transport: Mutex<HashMap<String, Vec<TransitVehicle>>>,
    /// Labels with a gate wait for the test to release their vehicles.
    pub transport_gates: Mutex<HashMap<String, oneshot::Receiver<Vec<TransitVehicle>>>>,
    pub requests: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn set_weather(&self, body: &str) {
        *self.weather_body.lock().unwrap() = Some(body.to_string());
    }

    pub fn set_transport(&self, label: &str, vehicles: Vec<TransitVehicle>) {
        self.transport
            .lock()
            .unwrap()
            .insert(label.to_string(), vehicles);
    }

    pub fn clear_transport(&self) {
        self.transport.lock().unwrap().clear();
    }

    pub fn gate_transport(&self, label: &str) -> oneshot::Sender<Vec<TransitVehicle>> {
        let (tx, rx) = oneshot::channel();
        self.transport_gates
            .lock()
            .unwrap()
            .insert(label.to_string(), rx);
        tx
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

#[async_trait]
impl DashboardApi for ScriptedApi {
    async fn fetch_weather(&self, city: &str) -> ApiResult<WeatherResponse> {
        self.record(format!("weather:{}", city));
        let body = self.weather_body.lock().unwrap().clone();
        match body {
            Some(body) => Ok(serde_json::from_str(&body)?),
            None => unavailable(),
        }
    }

    async fn fetch_crime(&self) -> ApiResult<Vec<CrimeIncident>> {
        self.record("crime".to_string());
        let crime = self.crime.lock().unwrap().clone();
        crime.map_or_else(unavailable, Ok)
    }

    async fn fetch_transport(&self, label: &str) -> ApiResult<Vec<TransitVehicle>> {
        self.record(format!("transport:{}", label));
        let gate = self.transport_gates.lock().unwrap().remove(label);
        if let Some(gate) = gate {
            return match gate.await {
                Ok(vehicles) => Ok(vehicles),
                Err(_) => unavailable(),
            };
        }

        let vehicles = self.transport.lock().unwrap().get(label).cloned();
        vehicles.map_or_else(unavailable, Ok)
    }

    async fn fetch_events(&self) -> ApiResult<Vec<LocalEvent>> {
        self.record("events".to_string());
        let events = self.events.lock().unwrap().clone();
        events.map_or_else(unavailable, Ok)
    }
}

pub fn vehicle(label: &str, route: &str) -> TransitVehicle {
    TransitVehicle {
        label: label.to_string(),
        route_id: route.to_string(),
        direction_id: 0,
        current_status: "IN_TRANSIT_TO".to_string(),
        occupancy: "FEW_SEATS_AVAILABLE".to_string(),
        lat: 49.4431,
        lon: 1.0993,
        bearing: Some(90.0),
        next_stops: None,
    }
}

pub fn incident(kind: &str, location: &str, severity: i64) -> CrimeIncident {
    CrimeIncident {
        kind: kind.to_string(),
        location: location.to_string(),
        severity: Some(Severity::Level(severity)),
    }
}

pub fn event(name: &str, location: &str, date: &str) -> LocalEvent {
    LocalEvent {
        name: name.to_string(),
        location: location.to_string(),
        date: date.to_string(),
    }
}
