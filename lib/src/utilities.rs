use chrono::{DateTime, TimeZone};


// "very happy" -> "very%20happy"
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

// 2024-10-13 09:30:00 +09:00
pub fn format_last_updated<Tz>(date_time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date_time.format("%Y-%m-%d %H:%M:%S %:z").to_string()
}
