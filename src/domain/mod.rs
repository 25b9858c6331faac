// Domain layer - Backend payloads and how each panel formats them
pub mod crime;
pub mod event;
pub mod geo;
pub mod transport;
pub mod weather;
