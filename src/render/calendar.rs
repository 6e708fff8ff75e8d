use crate::rsroc::model::{CalendarInterval, EventFields};
use reqwest::Url;

const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

/// Google Calendar "add event" link, query parameters percent-encoded
pub fn calendar_link(fields: &EventFields, interval: &CalendarInterval) -> Url {
    let details = if fields.contact_info.is_empty() {
        fields.event_content.clone()
    } else {
        format!("{}\n\n聯絡: {}", fields.event_content, fields.contact_info)
    };

    let mut url = Url::parse(GOOGLE_CALENDAR_URL).expect("Invalid Google Calendar URL");

    url.query_pairs_mut()
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &fields.event_title)
        .append_pair("dates", &interval.to_token())
        .append_pair("details", details.trim())
        .append_pair("location", &fields.event_location);

    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsroc::interval::normalize_interval;

    #[test_log::test]
    fn should_embed_every_parameter() {
        let fields = EventFields {
            event_title: "Spring Symposium & Workshop".to_string(),
            event_location: "台北".to_string(),
            event_content: "MRI".to_string(),
            ..EventFields::default()
        };
        let interval = normalize_interval("2025/04/05 09:00 ~ 12:00").unwrap();

        let url = calendar_link(&fields, &interval);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(url.host_str(), Some("calendar.google.com"));
        assert_eq!(
            pairs,
            vec![
                ("action".to_string(), "TEMPLATE".to_string()),
                ("text".to_string(), "Spring Symposium & Workshop".to_string()),
                (
                    "dates".to_string(),
                    "20250405T090000/20250405T120000".to_string()
                ),
                ("details".to_string(), "MRI".to_string()),
                ("location".to_string(), "台北".to_string()),
            ]
        );
        assert!(url.as_str().contains("Spring+Symposium+%26+Workshop"));
    }

    #[test_log::test]
    fn should_add_contact_info_to_details() {
        let fields = EventFields {
            event_content: "MRI".to_string(),
            contact_info: "王小姐".to_string(),
            ..EventFields::default()
        };
        let interval = normalize_interval("2025/04/05 09:00").unwrap();

        let url = calendar_link(&fields, &interval);
        let details = url
            .query_pairs()
            .find(|(key, _)| key == "details")
            .map(|(_, value)| value.into_owned());

        assert_eq!(details.as_deref(), Some("MRI\n\n聯絡: 王小姐"));
    }
}
