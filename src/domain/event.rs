// Local event domain model
use serde::Deserialize;

use super::geo::Pin;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LocalEvent {
    pub name: String,
    pub location: String,
    pub date: String,
}

impl Pin for LocalEvent {
    fn list_entry(&self) -> String {
        format!("{} at {} on {}", self.name, self.location, self.date)
    }

    fn popup(&self) -> String {
        format!("{} at {}", self.name, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_formatting() {
        let event: LocalEvent = serde_json::from_str(
            r#"{"name": "Concert", "location": "City Hall", "date": "2025-09-05", "description": "Jazz evening"}"#,
        )
        .unwrap();

        assert_eq!(event.list_entry(), "Concert at City Hall on 2025-09-05");
        assert_eq!(event.popup(), "Concert at City Hall");
    }
}
