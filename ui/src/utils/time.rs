use jiff::{Timestamp, Zoned, tz};

/// Localize a timestamp to the browser's timezone.
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(tz::TimeZone::system())
}

/// "Listed Mar 3, 2025" style date.
pub fn format_listed_date(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp)
        .strftime("%b %-d, %Y")
        .to_string()
}
