//! Lenient decoders for the service's JSON, which emits `null` for most
//! absent values and encodes booleans as integers.

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrBool {
    Int(i64),
    Bool(bool),
}

/// Decode an integer flag (`0`/`1`, occasionally a real boolean) as `bool`.
pub(crate) fn int_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<IntOrBool>::deserialize(deserializer)? {
        Some(IntOrBool::Int(v)) => v > 0,
        Some(IntOrBool::Bool(b)) => b,
        None => false,
    })
}

/// Decode a date-or-absent integer. Zero and `null` both mean absent.
pub(crate) fn optional_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.filter(|&v| v != 0))
}
