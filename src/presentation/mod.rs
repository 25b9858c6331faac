// Presentation layer - Console front end and the in-memory map
pub mod commands;
pub mod console;
pub mod map_layer;
