use chrono::{DateTime, Local, TimeZone};

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y at %H:%M:%S";

/// Current local time as `DD/MM/YYYY at HH:MM:SS`.
pub fn now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}
