use std::time::Duration;

#[derive(Debug)]
pub struct Config {
    pub fetch_config: FetchConfig,
    pub debug_config: DebugConfig,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub listing_url: String,
    pub timeout: Duration,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub event_limit: Option<usize>,
}
