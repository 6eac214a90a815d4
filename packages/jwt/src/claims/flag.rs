//! Boolean claims travel as the strings `"true"` and `"false"`.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serializer};

/// Textual form of a flag
#[inline]
#[must_use]
pub(crate) fn as_str(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

pub(crate) fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(flag) => serializer.serialize_str(as_str(*flag)),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(de::Error::invalid_value(
            Unexpected::Str(other),
            &"\"true\" or \"false\"",
        )),
    }
}
