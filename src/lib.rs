pub mod config;
pub mod render;
pub mod rsroc;
pub mod tracing;
