use crate::domain::geo::Coordinate;
use anyhow::{ensure, Context};
use serde::Deserialize;

pub const CONFIG_PATH_VAR: &str = "CITY_DASHBOARD_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/dashboard";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub backend: BackendSettings,
    pub map: MapSettings,
    pub weather: WeatherSettings,
    pub transport: TransportSettings,
    pub pins: PinSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl MapSettings {
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.center_lat, self.center_lon)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherSettings {
    pub default_city: String,
    pub refresh_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TransportSettings {
    /// One timer per entry, all running side by side.
    pub refresh_secs: Vec<u64>,
}

/// Where crime and event markers land: `reference` plus up to `spread` degrees on each axis.
#[derive(Debug, Deserialize, Clone)]
pub struct PinSettings {
    pub reference_lat: f64,
    pub reference_lon: f64,
    pub spread: f64,
}

impl PinSettings {
    pub fn reference(&self) -> Coordinate {
        Coordinate::new(self.reference_lat, self.reference_lon)
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.backend.base_url.trim().is_empty(),
            "backend.base_url must not be empty"
        );
        ensure!(
            !self.weather.default_city.trim().is_empty(),
            "weather.default_city must not be empty"
        );
        ensure!(
            self.weather.refresh_secs > 0,
            "weather.refresh_secs must be positive"
        );
        ensure!(
            self.transport.refresh_secs.iter().all(|s| *s > 0),
            "transport.refresh_secs entries must be positive"
        );
        ensure!(
            self.pins.spread.is_finite() && self.pins.spread >= 0.0,
            "pins.spread must be a non-negative number"
        );
        ensure!(
            self.pins.reference().is_valid(),
            "pins reference point is not a valid coordinate"
        );
        Ok(())
    }
}

/// Built-in defaults, then `config/dashboard.{toml,...}` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_dashboard_config_from(&path)
}

pub fn load_dashboard_config_from(path: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("backend.base_url", "http://localhost:7070")?
        .set_default("map.center_lat", 49.4431)?
        .set_default("map.center_lon", 1.0993)?
        .set_default("map.zoom", 13_i64)?
        .set_default(
            "map.tile_url",
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        )?
        .set_default("map.attribution", "© OpenStreetMap contributors")?
        .set_default("weather.default_city", "Rouen")?
        .set_default("weather.refresh_secs", 300_i64)?
        .set_default("transport.refresh_secs", vec![100_i64, 30])?
        .set_default("pins.reference_lat", 49.44)?
        .set_default("pins.reference_lon", 1.09)?
        .set_default("pins.spread", 0.01)?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("transport.refresh_secs"),
        )
        .build()
        .with_context(|| format!("Failed to load configuration from {}", path))?;

    let config: DashboardConfig = settings
        .try_deserialize()
        .context("Invalid dashboard configuration")?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> DashboardConfig {
        load_dashboard_config_from("config/does-not-exist").unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = defaults();

        assert_eq!(config.backend.base_url, "http://localhost:7070");
        assert_eq!(config.map.center(), Coordinate::new(49.4431, 1.0993));
        assert_eq!(config.map.zoom, 13);
        assert_eq!(config.weather.default_city, "Rouen");
        assert_eq!(config.weather.refresh_secs, 300);
        assert_eq!(config.transport.refresh_secs, vec![100, 30]);
        assert_eq!(config.pins.reference(), Coordinate::new(49.44, 1.09));
        assert_eq!(config.pins.spread, 0.01);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = defaults();
        config.transport.refresh_secs = vec![30, 0];
        assert!(config.validate().is_err());

        let mut config = defaults();
        config.pins.spread = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = defaults();
        config.weather.default_city = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = defaults();
        config.transport.refresh_secs.clear();
        assert!(config.validate().is_ok());
    }
}
