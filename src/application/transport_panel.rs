// Transport panel - Live vehicles for the searched label
use crate::application::app_state::AppState;
use crate::application::dashboard_api::DashboardApi;
use crate::application::document::{Document, InputField, Region, RegionContent};
use crate::application::map_view::MapView;
use crate::domain::geo::MarkerHandle;
use crate::domain::transport::TransitVehicle;
use std::sync::{Arc, Mutex, PoisonError};

pub const LOAD_FAILED: &str = "Failed to load transport data.";

pub struct TransportPanel {
    api: Arc<dyn DashboardApi>,
    document: Arc<dyn Document>,
    map: Arc<dyn MapView>,
    state: Arc<AppState>,
    /// Markers of the last successful fetch. Only this panel touches them.
    markers: Mutex<Vec<MarkerHandle>>,
}

impl TransportPanel {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        document: Arc<dyn Document>,
        map: Arc<dyn MapView>,
        state: Arc<AppState>,
    ) -> Self {
        Self {
            api,
            document,
            map,
            state,
            markers: Mutex::new(Vec::new()),
        }
    }

    /// An empty label is a no-op: no request, display and markers untouched.
    pub async fn refresh(&self, label: &str) {
        if label.is_empty() {
            tracing::debug!("No vehicle label set, skipping transport refresh");
            return;
        }

        match self.api.fetch_transport(label).await {
            Ok(vehicles) => self.show(label, &vehicles),
            Err(e) => {
                tracing::error!("Transport fetch error: {}", e);
                self.document
                    .render(Region::Transport, RegionContent::Text(LOAD_FAILED.to_string()));
            }
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // List and markers are swapped under one lock so overlapping refreshes
    // never interleave: whichever response lands last is what stays visible.
    fn show(&self, label: &str, vehicles: &[TransitVehicle]) {
        let mut markers = self
            .markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let entries = vehicles.iter().map(TransitVehicle::list_entry).collect();
        self.document
            .render(Region::Transport, RegionContent::List(entries));
        self.document
            .set_input_value(InputField::BusLabel, &self.state.last_searched_label());

        for handle in markers.drain(..) {
            self.map.remove_marker(handle);
        }
        markers.extend(vehicles.iter().map(|v| self.map.add_marker(v.marker())));

        tracing::debug!("{} vehicles shown for label {}", markers.len(), label);
    }
}
