// Application layer - Panels, shared state and scheduling
pub mod app_state;
pub mod dashboard;
pub mod dashboard_api;
pub mod document;
pub mod map_view;
pub mod pin_panels;
pub mod scheduler;
pub mod transport_panel;
pub mod weather_panel;

#[cfg(test)]
pub mod testing;
