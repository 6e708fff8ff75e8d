use rsroc_events::config::env_loader::load_config;
use rsroc_events::render::calendar::calendar_link;
use rsroc_events::render::store::EventDetailsStore;
use rsroc_events::render::summary::summary_text;
use rsroc_events::rsroc::api::RsrocAPI;
use rsroc_events::tracing::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let loki = setup_tracing().await;
    let config = load_config();

    let api = RsrocAPI::new(&config.fetch_config).expect("Failed to create RSROC client");
    let events = api
        .get_events(config.debug_config.event_limit)
        .await
        .expect("Failed to get the event listing");

    let mut store = EventDetailsStore::default();

    for event in events {
        if let Some(summary) = summary_text(&event.fields) {
            info!("{}: {}", event.label, summary);
        }

        if let Some(interval) = &event.interval {
            info!(
                "Calendar link for '{}': {}",
                event.fields.event_title,
                calendar_link(&event.fields, interval)
            );
        }

        match serde_json::to_string(&event) {
            Ok(json) => println!("{}", json),
            Err(err) => error!("Failed serializing event {}: {}", event.link, err),
        }

        store.insert(event.link, event.fields);
    }

    info!("Stored details for {} events", store.len());

    if let Some(loki) = loki {
        loki.shutdown().await;
    }
}
