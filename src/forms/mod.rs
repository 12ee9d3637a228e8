use serde::{Deserialize, Deserializer};

pub mod auth;
pub mod menu;
pub mod orders;

/// Deserialize an optional text field, treating a blank submission as absent.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// Deserialize an optional id field. Select widgets post an empty string for
/// the "no selection" option, which must map to `None` rather than fail.
pub fn empty_string_as_none_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        Some(text) if !text.trim().is_empty() => text
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
