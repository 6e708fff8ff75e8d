use chrono::NaiveDateTime;
use reqwest::Url;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

const UNAVAILABLE_TITLE: &str = "Event";
const INTERVAL_TOKEN_FORMAT: &str = "%Y%m%dT%H%M%S";

#[derive(
    strum::IntoStaticStr, strum::EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum EventField {
    EducationPoints,
    RecognizedHours,
    EventDateTime,
    EventLocation,
    EventTitle,
    EventContent,
    ContactInfo,
}

/// Fields read from an event's detail page.
///
/// Every field is an empty string when the page doesn't have it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFields {
    pub education_points: String,
    pub recognized_hours: String,
    pub event_date_time: String,
    pub event_location: String,
    pub event_title: String,
    pub event_content: String,
    pub contact_info: String,
}

impl EventFields {
    /// Record used when the detail page couldn't be fetched or parsed
    pub fn unavailable() -> Self {
        Self {
            event_title: UNAVAILABLE_TITLE.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::EducationPoints => &self.education_points,
            EventField::RecognizedHours => &self.recognized_hours,
            EventField::EventDateTime => &self.event_date_time,
            EventField::EventLocation => &self.event_location,
            EventField::EventTitle => &self.event_title,
            EventField::EventContent => &self.event_content,
            EventField::ContactInfo => &self.contact_info,
        }
    }

    pub fn set(&mut self, field: EventField, value: String) {
        let slot = match field {
            EventField::EducationPoints => &mut self.education_points,
            EventField::RecognizedHours => &mut self.recognized_hours,
            EventField::EventDateTime => &mut self.event_date_time,
            EventField::EventLocation => &mut self.event_location,
            EventField::EventTitle => &mut self.event_title,
            EventField::EventContent => &mut self.event_content,
            EventField::ContactInfo => &mut self.contact_info,
        };

        *slot = value;
    }
}

/// Start and end of an event, both naive local times on the same day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// `YYYYMMDDTHHMMSS/YYYYMMDDTHHMMSS`, as calendar import URLs expect it
    pub fn to_token(&self) -> String {
        self.to_string()
    }
}

impl Display for CalendarInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.format(INTERVAL_TOKEN_FORMAT),
            self.end.format(INTERVAL_TOKEN_FORMAT)
        )
    }
}

impl Serialize for CalendarInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An anchor found on the calendar listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLink {
    pub url: Url,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichedEvent {
    pub link: String,
    pub label: String,
    pub fields: EventFields,
    pub interval: Option<CalendarInterval>,
}
