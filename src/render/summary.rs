use crate::rsroc::model::EventFields;
use itertools::Itertools;

/// Line shown under the event on the calendar, `None` when there's nothing to show
pub fn summary_text(fields: &EventFields) -> Option<String> {
    if fields.education_points.is_empty() && fields.recognized_hours.is_empty() {
        return None;
    }

    Some(format!(
        "{}, 時數: {}",
        fields.education_points, fields.recognized_hours
    ))
}

pub fn tooltip_text(fields: &EventFields) -> String {
    [
        ("", fields.event_title.as_str()),
        ("時間: ", fields.event_date_time.as_str()),
        ("地點: ", fields.event_location.as_str()),
        ("積點: ", fields.education_points.as_str()),
        ("時數: ", fields.recognized_hours.as_str()),
        ("聯絡: ", fields.contact_info.as_str()),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(prefix, value)| format!("{}{}", prefix, value))
    .join("\n")
}
