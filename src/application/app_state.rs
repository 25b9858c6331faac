// Shared state written by user actions and read by the timers
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct AppState {
    current_city: RwLock<String>,
    last_searched_label: RwLock<String>,
}

impl AppState {
    pub fn new(initial_city: String) -> Self {
        Self {
            current_city: RwLock::new(initial_city),
            last_searched_label: RwLock::new(String::new()),
        }
    }

    pub fn current_city(&self) -> String {
        self.current_city
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Written by the initial load and the manual weather refresh only.
    pub fn set_current_city(&self, city: String) {
        *self
            .current_city
            .write()
            .unwrap_or_else(PoisonError::into_inner) = city;
    }

    pub fn last_searched_label(&self) -> String {
        self.last_searched_label
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Written by the search action only.
    pub fn set_last_searched_label(&self, label: String) {
        *self
            .last_searched_label
            .write()
            .unwrap_or_else(PoisonError::into_inner) = label;
    }
}
