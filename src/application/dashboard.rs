// Dashboard - Wires the panels together, runs the initial load and owns the timers
use crate::application::app_state::AppState;
use crate::application::dashboard_api::DashboardApi;
use crate::application::document::{Document, InputField, Region};
use crate::application::map_view::{Jitter, MapView};
use crate::application::pin_panels::{CrimePanel, EventsPanel, PinBoard};
use crate::application::scheduler::Scheduler;
use crate::application::transport_panel::TransportPanel;
use crate::application::weather_panel::WeatherPanel;
use crate::infrastructure::config::DashboardConfig;
use std::sync::Arc;
use std::time::Duration;

pub struct Dashboard {
    state: Arc<AppState>,
    document: Arc<dyn Document>,
    weather: Arc<WeatherPanel>,
    crime: CrimePanel,
    events: EventsPanel,
    transport: Arc<TransportPanel>,
    scheduler: Scheduler,
    weather_period: Duration,
    transport_periods: Vec<Duration>,
}

impl Dashboard {
    pub fn new(
        config: &DashboardConfig,
        api: Arc<dyn DashboardApi>,
        document: Arc<dyn Document>,
        map: Arc<dyn MapView>,
        jitter: Arc<dyn Jitter>,
    ) -> Self {
        let state = Arc::new(AppState::new(config.weather.default_city.clone()));
        let reference = config.pins.reference();

        let weather = Arc::new(WeatherPanel::new(
            api.clone(),
            document.clone(),
            config.weather.default_city.clone(),
        ));
        let crime = CrimePanel::new(
            api.clone(),
            PinBoard::new(
                "Crime",
                Region::Crime,
                document.clone(),
                map.clone(),
                jitter.clone(),
                reference,
            ),
        );
        let events = EventsPanel::new(
            api.clone(),
            PinBoard::new("Events", Region::Events, document.clone(), map.clone(), jitter, reference),
        );
        let transport = Arc::new(TransportPanel::new(api, document.clone(), map, state.clone()));

        Self {
            state,
            document,
            weather,
            crime,
            events,
            transport,
            scheduler: Scheduler::new(),
            weather_period: Duration::from_secs(config.weather.refresh_secs),
            transport_periods: config
                .transport
                .refresh_secs
                .iter()
                .map(|s| Duration::from_secs(*s))
                .collect(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn transport_marker_count(&self) -> usize {
        self.transport.marker_count()
    }

    /// Initial load of every panel, then arms the periodic refreshes.
    pub async fn start(&mut self) {
        let city = self.city_input();
        self.state.set_current_city(city.clone());
        tracing::info!("Loading dashboard for {}", city);

        futures::join!(
            self.weather.refresh(&city),
            self.crime.refresh(),
            self.transport.refresh(""),
            self.events.refresh(),
        );

        self.arm_timers();
    }

    fn arm_timers(&mut self) {
        let weather = self.weather.clone();
        let state = self.state.clone();
        self.scheduler.every("weather", self.weather_period, move || {
            let weather = weather.clone();
            let state = state.clone();
            async move {
                let city = state.current_city();
                weather.refresh(&city).await;
            }
        });

        for period in self.transport_periods.clone() {
            let transport = self.transport.clone();
            let state = self.state.clone();
            self.scheduler.every("transport", period, move || {
                let transport = transport.clone();
                let state = state.clone();
                async move {
                    let label = state.last_searched_label();
                    transport.refresh(&label).await;
                }
            });
        }

        tracing::info!("{} refresh timers running", self.scheduler.timer_count());
    }

    /// The weather refresh button. The fetch runs in the background so the
    /// caller is never held up by a slow backend.
    pub fn refresh_weather_clicked(&self) {
        let city = self.city_input();
        self.state.set_current_city(city.clone());

        let weather = self.weather.clone();
        self.scheduler.spawn("weather refresh", async move {
            weather.refresh(&city).await;
        });
    }

    /// The transport search button. Searching with an empty input does nothing.
    pub fn search_transport_clicked(&self) {
        let label = self
            .document
            .input_value(InputField::BusLabel)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        self.state.set_last_searched_label(label.clone());

        let transport = self.transport.clone();
        self.scheduler.spawn("transport search", async move {
            transport.refresh(&label).await;
        });
    }

    pub async fn shutdown(self) {
        tracing::info!("Stopping refresh timers");
        self.scheduler.shutdown().await;
    }

    fn city_input(&self) -> String {
        self.document
            .input_value(InputField::City)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.weather.default_city().to_string())
    }
}
