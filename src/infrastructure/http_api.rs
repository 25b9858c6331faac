// HTTP implementation of the dashboard backend
use crate::application::dashboard_api::DashboardApi;
use crate::domain::crime::CrimeIncident;
use crate::domain::event::LocalEvent;
use crate::domain::transport::TransitVehicle;
use crate::domain::weather::WeatherResponse;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDashboardApi {
    pub fn new(base_url: String) -> ApiResult<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder().build()?,
        })
    }

    fn endpoint(&self, path: &str, query: Option<(&str, &str)>) -> String {
        match query {
            Some((key, value)) => format!(
                "{}{}?{}={}",
                self.base_url,
                path,
                key,
                urlencoding::encode(value)
            ),
            None => format!("{}{}", self.base_url, path),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> ApiResult<T> {
        tracing::debug!("Requesting {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), truncate_body(&body)));
        }

        tracing::trace!("Response: {}", body);
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_weather(&self, city: &str) -> ApiResult<WeatherResponse> {
        self.get_json(self.endpoint("/api/weather", Some(("city", city))))
            .await
    }

    async fn fetch_crime(&self) -> ApiResult<Vec<CrimeIncident>> {
        self.get_json(self.endpoint("/api/crime", None)).await
    }

    async fn fetch_transport(&self, label: &str) -> ApiResult<Vec<TransitVehicle>> {
        self.get_json(self.endpoint("/api/transport", Some(("label", label))))
            .await
    }

    async fn fetch_events(&self) -> ApiResult<Vec<LocalEvent>> {
        self.get_json(self.endpoint("/api/events", None)).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
