// Backend port consumed by the panels
use crate::domain::crime::CrimeIncident;
use crate::domain::event::LocalEvent;
use crate::domain::transport::TransitVehicle;
use crate::domain::weather::WeatherResponse;
use crate::error::ApiResult;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /api/weather?city=<city>`
    async fn fetch_weather(&self, city: &str) -> ApiResult<WeatherResponse>;

    /// `GET /api/crime`
    async fn fetch_crime(&self) -> ApiResult<Vec<CrimeIncident>>;

    /// `GET /api/transport?label=<label>`
    async fn fetch_transport(&self, label: &str) -> ApiResult<Vec<TransitVehicle>>;

    /// `GET /api/events`
    async fn fetch_events(&self) -> ApiResult<Vec<LocalEvent>>;
}
