use crate::config::model::{Config, DebugConfig, FetchConfig};
use std::env;
use std::time::Duration;

const DEFAULT_LISTING_URL: &str = "https://www.rsroc.org.tw/action/";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

pub fn load_config() -> Config {
    let listing_url = load_string_config("RSROC_LISTING_URL", DEFAULT_LISTING_URL);
    let timeout_secs = load_u64_config("RSROC_FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS);

    let debug_event_limit = load_usize_config("DEBUG_EVENT_LIMIT");

    Config {
        fetch_config: FetchConfig {
            listing_url,
            timeout: Duration::from_secs(timeout_secs),
        },
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
    }
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn load_u64_config(name: &str, default: u64) -> u64 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected a positive integer number.",
                name
            )
        })
}

fn load_usize_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a positive integer number.", name)
        })),
        Err(_) => None,
    }
}
