use super::model::CalendarInterval;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::{debug, trace, warn};

lazy_static! {
    // 2025/04/05　星期六　09:00 ~ 12:00
    static ref DATE_TIME: Regex = Regex::new(
        r"([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})[^0-9]*?([0-9]{1,2}):([0-9]{2})(?:[\s\u{3000}]*(?:~|～|〜|-|－|–|—|至)[\s\u{3000}]*([0-9]{1,2}):([0-9]{2}))?"
    )
    .expect("Failed to create date time regex");
}

/// Parses the detail page's date/time text into a calendar interval.
///
/// Without an end time the interval ends when it starts. Returns `None` when the
/// text isn't in the expected format.
pub fn normalize_interval(raw: &str) -> Option<CalendarInterval> {
    let Some(captures) = DATE_TIME.captures(raw) else {
        trace!("No date/time found in '{}'", raw);
        return None;
    };

    if captures.get(6).is_none() {
        let rest = raw[captures.get(0).map_or(raw.len(), |whole| whole.end())..].trim();

        if rest.chars().any(|c| c.is_ascii_digit()) {
            debug!("Ignoring '{}' after the start time of '{}'", rest, raw);
        }
    }

    let interval = build_interval(&captures);

    if interval.is_none() {
        warn!("Date/time '{}' isn't a valid calendar date", raw);
    }

    interval
}

fn build_interval(captures: &Captures) -> Option<CalendarInterval> {
    let number = |index: usize| {
        captures
            .get(index)
            .and_then(|group| group.as_str().parse::<u32>().ok())
    };

    let date = NaiveDate::from_ymd_opt(captures[1].parse().ok()?, number(2)?, number(3)?)?;
    let (start_hour, start_minute) = (number(4)?, number(5)?);
    let end_hour = number(6).unwrap_or(start_hour);
    let end_minute = number(7).unwrap_or(start_minute);

    Some(CalendarInterval::new(
        date.and_hms_opt(start_hour, start_minute, 0)?,
        date.and_hms_opt(end_hour, end_minute, 0)?,
    ))
}
