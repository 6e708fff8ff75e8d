use lazy_static::lazy_static;
use std::str::FromStr;
use std::{env, io};
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::BackgroundTaskController;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const SERVICE_NAME: &str = "rsroc_events";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

lazy_static! {
    static ref LOKI_URL: Option<String> = env::var("LOKI_URL").ok();
    static ref LOG_LEVEL: Option<String> = env::var("LOG_LEVEL").ok();
}

/// Keeps the Loki background task alive until `shutdown` flushes it
pub struct LokiHandle {
    controller: BackgroundTaskController,
    task: JoinHandle<()>,
}

impl LokiHandle {
    pub async fn shutdown(self) {
        self.controller.shutdown().await;

        if let Err(err) = self.task.await {
            warn!("Loki task ended abnormally: {}", err);
        }
    }
}

/// Logs go to stderr (stdout carries the JSON records), and to Loki as well
/// when `LOKI_URL` is set and reachable
pub async fn setup_tracing() -> Option<LokiHandle> {
    let filter = filter::Targets::new()
        .with_target(SERVICE_NAME, crate_log_level(LOG_LEVEL.as_deref()))
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr));

    let Some(loki_url) = LOKI_URL.as_deref() else {
        registry.init();
        warn!("Loki URL not provided. Continuing without it.");
        return None;
    };

    let Some(loki_url) = reachable_loki_url(loki_url).await else {
        registry.init();
        warn!("Couldn't connect to Loki at {}. Continuing without it.", loki_url);
        return None;
    };

    let (layer, controller, task) = tracing_loki::builder()
        .label("service", SERVICE_NAME)
        .expect("Failed setting label")
        .build_controller_url(loki_url)
        .expect("Failed building Loki layer");

    registry.with(layer).init();
    info!("Loki initialized");

    Some(LokiHandle {
        controller,
        task: tokio::spawn(task),
    })
}

async fn reachable_loki_url(raw: &str) -> Option<Url> {
    let url: Url = raw.parse().expect("Invalid LOKI_URL format");

    reqwest::get(url.clone()).await.ok().map(|_| url)
}

fn crate_log_level(configured: Option<&str>) -> Level {
    configured
        .map(|level| {
            Level::from_str(level).unwrap_or_else(|_| {
                panic!(
                    "Invalid config 'LOG_LEVEL'. Expected one of trace, debug, info, warn, error."
                )
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_info() {
        assert_eq!(crate_log_level(None), Level::INFO);
    }

    #[test]
    fn should_read_the_configured_level() {
        assert_eq!(crate_log_level(Some("debug")), Level::DEBUG);
        assert_eq!(crate_log_level(Some("TRACE")), Level::TRACE);
    }

    #[test]
    #[should_panic(expected = "LOG_LEVEL")]
    fn when_the_level_is_unknown_should_panic() {
        crate_log_level(Some("loud"));
    }
}
