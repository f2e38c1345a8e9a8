//! Null-tolerant field deserialization
//!
//! The API sends `null` for unset attributes as often as it omits them.
//! Record fields use `#[serde(deserialize_with = "nullable::deserialize")]`
//! so an explicit `null` lands as the field's default, the same as a
//! missing key under `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, mapping `null` to `T::default()`
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
