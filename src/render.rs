pub mod calendar;
pub mod store;
pub mod summary;
pub mod tooltip;
