// Weather panel - Current conditions for the selected city
use crate::application::dashboard_api::DashboardApi;
use crate::application::document::{Document, Region, RegionContent};
use crate::domain::weather::WeatherOutcome;
use chrono::Local;
use std::sync::Arc;

pub const LOAD_FAILED: &str = "Failed to load weather.";

pub struct WeatherPanel {
    api: Arc<dyn DashboardApi>,
    document: Arc<dyn Document>,
    default_city: String,
}

impl WeatherPanel {
    pub fn new(api: Arc<dyn DashboardApi>, document: Arc<dyn Document>, default_city: String) -> Self {
        Self {
            api,
            document,
            default_city,
        }
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// Empty input falls back to the default city; anything else is sent as typed.
    pub fn resolve_city<'a>(&'a self, city: &'a str) -> &'a str {
        if city.is_empty() { &self.default_city } else { city }
    }

    pub async fn refresh(&self, city: &str) {
        let city = self.resolve_city(city);
        tracing::debug!("Refreshing weather for {}", city);

        let content = match self.api.fetch_weather(city).await {
            Ok(response) => match response.into_outcome() {
                WeatherOutcome::Failed(message) => {
                    RegionContent::Text(WeatherOutcome::error_message(&message))
                }
                WeatherOutcome::Reading(reading) => RegionContent::Block(reading.render_in(&Local)),
            },
            Err(e) => {
                tracing::error!("Weather fetch error: {}", e);
                RegionContent::Text(LOAD_FAILED.to_string())
            }
        };

        self.document.render(Region::Weather, content);
    }
}
