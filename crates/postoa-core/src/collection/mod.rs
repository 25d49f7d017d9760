pub mod item;
pub mod request;
pub mod spec;
pub mod url;

use serde::{Deserialize, Deserializer};

use crate::error::DecodeError;
use spec::Collection;

/// Parse a Postman collection from JSON text.
pub fn from_json(input: &str) -> Result<Collection, DecodeError> {
    let collection: Collection = serde_json::from_str(input)?;
    Ok(collection)
}

/// Parse a Postman collection from raw bytes.
pub fn from_slice(input: &[u8]) -> Result<Collection, DecodeError> {
    let collection: Collection = serde_json::from_slice(input)?;
    Ok(collection)
}

/// Postman writes `null` for fields it has no value for; treat it like a
/// missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
