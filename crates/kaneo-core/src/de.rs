//! Lenient field deserializers for API payloads.
//!
//! One malformed field must not fail a whole board or list, so these map
//! `null`, empty and unparseable values to an absent or default value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::enums::Status;
use crate::task::parse_timestamp;

/// `null` becomes `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` and `""` become `None`; any other string is a status.
pub(crate) fn status_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Status>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(Status::from))
}

/// Accepts the shapes [`parse_timestamp`] knows. `null`, `""` and
/// anything unparseable are absent; the last is logged.
pub(crate) fn lenient_datetime<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => {
            let parsed = parse_timestamp(s.trim());
            if parsed.is_none() {
                tracing::warn!(value = %s, "ignoring unparseable timestamp");
            }
            parsed
        }
        Some(other) => {
            tracing::warn!(value = %other, "ignoring non-string timestamp");
            None
        }
    })
}

/// Like [`lenient_datetime`], with the Unix epoch standing in for an
/// absent value so orderings stay deterministic.
pub(crate) fn timestamp_or_epoch<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    Ok(lenient_datetime(deserializer)?.unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
}

pub(crate) fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}
