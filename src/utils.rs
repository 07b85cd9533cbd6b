//! Utility functions for the matchmaking and progression engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Generate a new unique match ID
pub fn generate_match_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Round a value to two decimal places for stable display and serialization
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Deserialize a timestamp leniently: anything that is not a parseable
/// RFC 3339 string becomes `None`, so one corrupt row cannot poison a
/// whole history computation. Callers treat `None` as "too old".
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => s.parse::<DateTime<Utc>>().ok(),
        _ => None,
    }))
}
