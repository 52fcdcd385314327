pub mod style;
pub mod viewport;

use chrono::{Local, TimeZone};

pub fn local_time(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::from("error parsing timestamp"),
    }
}
