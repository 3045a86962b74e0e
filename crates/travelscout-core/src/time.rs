// Local time for a destination's IANA zone
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// en-US, 12-hour clock, short weekday: "Sat 3:07 PM"
pub const DISPLAY_FORMAT: &str = "%a %-I:%M %p";

/// Current local time in `time_zone`, formatted for display
pub fn format_local_time(time_zone: &str) -> Result<String> {
    format_local_time_at(time_zone, Utc::now())
}

/// Same as `format_local_time`, for a fixed instant
pub fn format_local_time_at(time_zone: &str, now: DateTime<Utc>) -> Result<String> {
    let zone = parse_zone(time_zone)?;
    Ok(now.with_timezone(&zone).format(DISPLAY_FORMAT).to_string())
}

/// Exact IANA name first, then a case-insensitive lookup. Surrounding
/// whitespace is not stripped: `" Asia/Tokyo "` is not a zone.
fn parse_zone(time_zone: &str) -> Result<Tz> {
    if let Ok(zone) = time_zone.parse::<Tz>() {
        return Ok(zone);
    }
    Tz::from_str_insensitive(time_zone).map_err(|_| Error::InvalidTimeZone(time_zone.to_string()))
}
