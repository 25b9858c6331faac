// Infrastructure layer - Configuration and the HTTP backend adapter
pub mod config;
pub mod http_api;
