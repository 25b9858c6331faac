// Map geometry and marker domain model
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.lat + d_lat, self.lon + d_lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// Opaque identifier for a marker currently on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: Coordinate,
    pub popup: String,
    /// Rotation in degrees, honoured by layers that support it.
    pub rotation: Option<f64>,
}

impl MarkerSpec {
    pub fn new(position: Coordinate, popup: String) -> Self {
        Self {
            position,
            popup,
            rotation: None,
        }
    }

    pub fn with_rotation(mut self, rotation: Option<f64>) -> Self {
        self.rotation = rotation;
        self
    }
}

/// An item shown both as a list entry and as a marker placed near a reference point.
pub trait Pin {
    fn list_entry(&self) -> String;
    fn popup(&self) -> String;
}
