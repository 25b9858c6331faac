// Crime incident domain model
use serde::Deserialize;
use std::fmt;

use super::geo::Pin;

/// Feeds report severity as an ordinal, a score or a label.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Severity {
    Level(i64),
    Score(f64),
    Label(String),
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Level(level) => write!(f, "{}", level),
            Severity::Score(score) => write!(f, "{}", score),
            Severity::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CrimeIncident {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl Pin for CrimeIncident {
    fn list_entry(&self) -> String {
        let severity = self
            .severity
            .as_ref()
            .map_or_else(|| "N/A".to_string(), Severity::to_string);
        format!("{} at {} (Severity: {})", self.kind, self.location, severity)
    }

    fn popup(&self) -> String {
        format!("{} at {}", self.kind, self.location)
    }
}
