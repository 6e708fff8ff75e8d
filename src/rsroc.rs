pub mod api;
pub mod extractor;
pub mod interval;
pub mod model;
