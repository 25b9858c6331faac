// Weather domain model
use chrono::TimeZone;
use serde::Deserialize;

pub const PLACEHOLDER: &str = "N/A";

/// Current conditions for one city. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub city: Option<String>,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub pressure: Option<f64>,
    pub humidity: Option<f64>,
    pub conditions: Option<Vec<String>>,
    pub wind_speed: Option<f64>,
    pub wind_deg: Option<f64>,
    pub visibility: Option<f64>,
    pub rain_1h: Option<f64>,
    pub clouds: Option<f64>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Body of `GET /api/weather`: either an application error or a reading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    reading: WeatherReading,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherOutcome {
    Failed(String),
    Reading(WeatherReading),
}

impl WeatherResponse {
    pub fn into_outcome(self) -> WeatherOutcome {
        // An empty error string does not count as an error.
        match self.error.filter(|e| !e.is_empty()) {
            Some(message) => WeatherOutcome::Failed(message),
            None => WeatherOutcome::Reading(self.reading),
        }
    }
}

impl WeatherOutcome {
    pub fn error_message(message: &str) -> String {
        format!("Weather error: {}", message)
    }
}

impl WeatherReading {
    /// Formats the panel block, rendering sunrise/sunset as wall-clock time in `tz`.
    pub fn render_in<Tz: TimeZone>(&self, tz: &Tz) -> Vec<String>
    where
        Tz::Offset: std::fmt::Display,
    {
        let conditions = self
            .conditions
            .as_ref()
            .filter(|c| !c.is_empty())
            .map(|c| c.join(", "))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        vec![
            format!("City: {}", text_or_placeholder(self.city.as_deref())),
            format!(
                "Temperature: {}°C (Feels like {}°C)",
                number_or_placeholder(self.temperature),
                number_or_placeholder(self.feels_like)
            ),
            format!(
                "Min/Max: {}°C / {}°C",
                number_or_placeholder(self.temp_min),
                number_or_placeholder(self.temp_max)
            ),
            format!("Conditions: {}", conditions),
            format!("Humidity: {}%", number_or_placeholder(self.humidity)),
            format!("Pressure: {} hPa", number_or_placeholder(self.pressure)),
            format!(
                "Wind: {} m/s at {}°",
                number_or_placeholder(self.wind_speed),
                number_or_placeholder(self.wind_deg)
            ),
            format!("Visibility: {} m", number_or_placeholder(self.visibility)),
            format!("Rain (last 1h): {} mm", self.rain_1h.unwrap_or(0.0)),
            format!("Cloud cover: {}%", number_or_placeholder(self.clouds)),
            format!("Sunrise: {}", clock_or_placeholder(self.sunrise, tz)),
            format!("Sunset: {}", clock_or_placeholder(self.sunset, tz)),
        ]
    }
}

fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

fn number_or_placeholder(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Zero is treated like a missing timestamp.
fn clock_or_placeholder<Tz: TimeZone>(timestamp: Option<i64>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .filter(|ts| *ts != 0)
        .and_then(|ts| tz.timestamp_opt(ts, 0).single())
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
