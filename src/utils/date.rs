pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// published_year reads the leading four characters of a published date ("2001-05-01", "2001")
// and yields 0 when they are missing or not a year.
pub fn published_year(date: Option<&str>) -> i32 {
    date.and_then(|d| d.get(0..4))
        .filter(|prefix| prefix.chars().all(|c| c.is_ascii_digit()))
        .and_then(|prefix| prefix.parse::<i32>().ok())
        .unwrap_or(0)
}

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        if let Ok(time) = DateTime::parse_from_rfc3339(&str_time) {
            return Ok(time.naive_utc());
        }
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        DateTime::<Utc>::from_naive_utc_and_offset(t, Utc).to_rfc3339()
    }
}
