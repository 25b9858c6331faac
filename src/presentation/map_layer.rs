// In-memory map layer - Tracks the live marker overlay
use crate::application::map_view::MapView;
use crate::domain::geo::{Coordinate, MarkerHandle, MarkerSpec};
use anyhow::ensure;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

pub const MAX_ZOOM: u8 = 19;

#[derive(Debug, Clone)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct MarkerLayer {
    center: Coordinate,
    zoom: u8,
    tiles: TileLayer,
    next_id: AtomicU64,
    markers: Mutex<BTreeMap<MarkerHandle, MarkerSpec>>,
}

impl MarkerLayer {
    /// Fails on an invalid center or zoom; the dashboard cannot run without a map.
    pub fn initialize(center: Coordinate, zoom: u8, tiles: TileLayer) -> anyhow::Result<Self> {
        ensure!(center.is_valid(), "Invalid map center {}", center);
        ensure!(zoom <= MAX_ZOOM, "Zoom {} is above the maximum of {}", zoom, MAX_ZOOM);

        tracing::info!(
            "Map centered on {} at zoom {} ({}, {})",
            center,
            zoom,
            tiles.url_template,
            tiles.attribution
        );

        Ok(Self {
            center,
            zoom,
            tiles,
            next_id: AtomicU64::new(1),
            markers: Mutex::new(BTreeMap::new()),
        })
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tiles(&self) -> &TileLayer {
        &self.tiles
    }

    /// Live markers in the order they were added.
    pub fn markers(&self) -> Vec<(MarkerHandle, MarkerSpec)> {
        self.markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(h, m)| (*h, m.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MapView for MarkerLayer {
    fn add_marker(&self, marker: MarkerSpec) -> MarkerHandle {
        let handle = MarkerHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        tracing::trace!("Adding marker {:?} at {}: {}", handle, marker.position, marker.popup);
        self.markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(handle, marker);
        handle
    }

    fn remove_marker(&self, handle: MarkerHandle) {
        let removed = self
            .markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle);
        if removed.is_none() {
            tracing::debug!("Marker {:?} was not on the map", handle);
        }
    }
}
