// Crime and events panels - Lists with markers scattered around a reference point
use crate::application::dashboard_api::DashboardApi;
use crate::application::document::{Document, Region, RegionContent};
use crate::application::map_view::{Jitter, MapView};
use crate::domain::geo::{Coordinate, MarkerSpec, Pin};
use crate::error::ApiResult;
use std::sync::Arc;

/// Rendering shared by the pin panels. Markers added here are never removed.
pub struct PinBoard {
    name: &'static str,
    region: Region,
    document: Arc<dyn Document>,
    map: Arc<dyn MapView>,
    jitter: Arc<dyn Jitter>,
    reference: Coordinate,
}

impl PinBoard {
    pub fn new(
        name: &'static str,
        region: Region,
        document: Arc<dyn Document>,
        map: Arc<dyn MapView>,
        jitter: Arc<dyn Jitter>,
        reference: Coordinate,
    ) -> Self {
        Self {
            name,
            region,
            document,
            map,
            jitter,
            reference,
        }
    }

    /// Failures are logged only; the region keeps what it showed before.
    pub fn show<T: Pin>(&self, result: ApiResult<Vec<T>>) {
        let items = match result {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("{} fetch error: {}", self.name, e);
                return;
            }
        };

        let entries = items.iter().map(T::list_entry).collect();
        self.document.render(self.region, RegionContent::List(entries));

        for item in &items {
            let position = self.jitter.scatter(self.reference);
            self.map.add_marker(MarkerSpec::new(position, item.popup()));
        }

        tracing::debug!("{}: {} items pinned", self.name, items.len());
    }
}

pub struct CrimePanel {
    api: Arc<dyn DashboardApi>,
    board: PinBoard,
}

impl CrimePanel {
    pub fn new(api: Arc<dyn DashboardApi>, board: PinBoard) -> Self {
        Self { api, board }
    }

    pub async fn refresh(&self) {
        let result = self.api.fetch_crime().await;
        self.board.show(result);
    }
}

pub struct EventsPanel {
    api: Arc<dyn DashboardApi>,
    board: PinBoard,
}

impl EventsPanel {
    pub fn new(api: Arc<dyn DashboardApi>, board: PinBoard) -> Self {
        Self { api, board }
    }

    pub async fn refresh(&self) {
        let result = self.api.fetch_events().await;
        self.board.show(result);
    }
}
