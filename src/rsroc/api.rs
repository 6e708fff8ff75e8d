use super::extractor::{extract_event_links, extract_fields};
use super::interval::normalize_interval;
use super::model::{EnrichedEvent, EventFields, EventLink};
use crate::config::model::FetchConfig;
use reqwest::{Client, StatusCode, Url};
use scraper::Html;
use std::fmt::{Display, Formatter};
use tracing::{error, info, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct RsrocAPI {
    client: Client,
    listing_url: Url,
}

impl RsrocAPI {
    pub fn new(config: &FetchConfig) -> Result<Self, APIError> {
        let listing_url = Url::parse(&config.listing_url)
            .map_err(|err| APIError::InvalidUrl(format!("{}: {}", config.listing_url, err)))?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            listing_url,
        })
    }

    #[tracing::instrument(skip(self), fields(listing_url = %self.listing_url))]
    pub async fn get_event_links(&self) -> Result<Vec<EventLink>, APIError> {
        let document = self.fetch_document(&self.listing_url).await?;
        let links = extract_event_links(&document, &self.listing_url);

        info!("Found {} event links", links.len());

        Ok(links)
    }

    /**
    Never fails: when the page can't be fetched the placeholder record is returned
    */
    #[tracing::instrument(skip(self, url), fields(url = %url))]
    pub async fn get_event_fields(&self, url: &Url) -> EventFields {
        match self.fetch_document(url).await {
            Ok(document) => extract_fields(&document),
            Err(err) => {
                error!("Error fetching event details: {}", err);
                EventFields::unavailable()
            }
        }
    }

    /**
    Returns the listed events in page order, fetching their details one at a time
    * limit: None will retrieve everything
    */
    #[tracing::instrument(skip(self))]
    pub async fn get_events(&self, limit: Option<usize>) -> Result<Vec<EnrichedEvent>, APIError> {
        let links = self.get_event_links().await?;
        let limit = limit.unwrap_or(links.len());

        if links.len() > limit {
            info!("Limiting to {} of {} events", limit, links.len());
        }

        let mut events = Vec::with_capacity(limit.min(links.len()));

        for link in links.into_iter().take(limit) {
            let fields = self.get_event_fields(&link.url).await;
            let interval = normalize_interval(&fields.event_date_time);

            if interval.is_none() && !fields.event_date_time.is_empty() {
                warn!(
                    "Unrecognized date/time '{}' for {} (omitting calendar link)",
                    fields.event_date_time, link.url
                );
            }

            events.push(EnrichedEvent {
                link: link.url.to_string(),
                label: link.label,
                fields,
                interval,
            });
        }

        Ok(events)
    }

    async fn fetch_document(&self, url: &Url) -> Result<Html, APIError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(APIError::Status(status));
        }

        let html = response.text().await?;

        Ok(Html::parse_document(&html))
    }
}

#[derive(Debug)]
pub enum APIError {
    Request(reqwest::Error),
    Status(StatusCode),
    InvalidUrl(String),
}

impl Display for APIError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            APIError::Request(err) => write!(f, "Request failed: {}", err),
            APIError::Status(status) => write!(f, "Server answered with {}", status),
            APIError::InvalidUrl(url) => write!(f, "Invalid URL {}", url),
        }
    }
}

impl std::error::Error for APIError {}

impl From<reqwest::Error> for APIError {
    fn from(err: reqwest::Error) -> Self {
        APIError::Request(err)
    }
}
