// Transit vehicle domain model
use serde::Deserialize;

use super::geo::{Coordinate, MarkerSpec};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StopEta {
    pub stop_id: String,
    pub eta: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TransitVehicle {
    pub label: String,
    #[serde(default)]
    pub route_id: String,
    #[serde(default)]
    pub direction_id: i64,
    #[serde(default)]
    pub current_status: String,
    #[serde(default)]
    pub occupancy: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub bearing: Option<f64>,
    #[serde(default)]
    pub next_stops: Option<Vec<StopEta>>,
}

impl TransitVehicle {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    /// Summary line, plus an upcoming-stops line when the feed has any.
    pub fn list_entry(&self) -> String {
        let mut entry = format!(
            "Vehicle {} (Route {}, Direction {}) - Status: {}, Occupancy: {}",
            self.label, self.route_id, self.direction_id, self.current_status, self.occupancy
        );

        if let Some(stops) = self.next_stops.as_ref().filter(|s| !s.is_empty()) {
            let stops = stops
                .iter()
                .map(|s| format!("{} at {}", s.stop_id, s.eta))
                .collect::<Vec<_>>()
                .join(", ");
            entry.push_str("\nNext stops: ");
            entry.push_str(&stops);
        }

        entry
    }

    pub fn marker(&self) -> MarkerSpec {
        MarkerSpec::new(
            self.position(),
            format!("Vehicle {} - Route {}", self.label, self.route_id),
        )
        .with_rotation(self.bearing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {
            "id": "tcar:1042", "label": "1042", "route_id": "T1", "direction_id": 0,
            "current_status": "IN_TRANSIT_TO", "occupancy": "MANY_SEATS_AVAILABLE",
            "lat": 49.4431, "lon": 1.0993, "bearing": 270,
            "next_stops": [
                {"stop_id": "Théâtre des Arts", "stop_name": "", "eta": "14:05"},
                {"stop_id": "Boulingrin", "eta": "14:09"}
            ]
        },
        {
            "label": "1043", "route_id": "F2", "direction_id": 1,
            "current_status": "STOPPED_AT", "occupancy": "FULL",
            "lat": 49.45, "lon": 1.1
        }
    ]"#;

    #[test]
    fn test_vehicle_list_entry_with_stops() {
        let vehicles: Vec<TransitVehicle> = serde_json::from_str(BODY).unwrap();

        assert_eq!(
            vehicles[0].list_entry(),
            "Vehicle 1042 (Route T1, Direction 0) - Status: IN_TRANSIT_TO, Occupancy: MANY_SEATS_AVAILABLE\n\
             Next stops: Théâtre des Arts at 14:05, Boulingrin at 14:09"
        );
        assert_eq!(
            vehicles[1].list_entry(),
            "Vehicle 1043 (Route F2, Direction 1) - Status: STOPPED_AT, Occupancy: FULL"
        );
    }

    #[test]
    fn test_vehicle_marker() {
        let vehicles: Vec<TransitVehicle> = serde_json::from_str(BODY).unwrap();

        let marker = vehicles[0].marker();
        assert_eq!(marker.popup, "Vehicle 1042 - Route T1");
        assert_eq!(marker.rotation, Some(270.0));
        assert_eq!(marker.position, Coordinate::new(49.4431, 1.0993));
        assert_eq!(vehicles[1].marker().rotation, None);
    }
}
