//! Collapses empty interval strings to "unset".

use serde::{Deserialize, Deserializer};

/// Maps an empty string to `None`.
pub fn from(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Serde `deserialize_with` helper for optional strings where `""` means unset.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(from))
}

/// Returns the value if it is set and non-empty.
#[allow(clippy::ref_option)]
pub fn get(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Serde `skip_serializing_if` helper: true for `None` and for `""`.
#[allow(clippy::ref_option)]
pub fn is_unset(value: &Option<String>) -> bool {
    get(value).is_none()
}
