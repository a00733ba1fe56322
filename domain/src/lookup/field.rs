//! Extracted field state
//!
//! Every labelled field scraped from a reply lands in one of four states.
//! Only [`ExtractedField::Value`] counts as provided; the `"N/A"` sentinel is
//! a rendering concern and never stored.

use serde::{Serialize, Serializer};

/// Sentinel shown for a field the reply did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtractedField {
    /// The model supplied a real value
    Value(String),
    /// The model echoed the template placeholder (e.g. `[Number]`)
    Placeholder(String),
    /// The label was present with nothing after the colon
    Empty,
    /// The label did not appear in the block
    #[default]
    Missing,
}

impl ExtractedField {
    /// The provided value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            ExtractedField::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, ExtractedField::Value(_))
    }

    /// The provided value, or [`NOT_AVAILABLE`]
    pub fn or_sentinel(&self) -> &str {
        self.value().unwrap_or(NOT_AVAILABLE)
    }
}

impl std::fmt::Display for ExtractedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.or_sentinel())
    }
}

/// `serialize_with` helper for records whose JSON contract carries
/// [`NOT_AVAILABLE`] instead of `null`.
pub(crate) fn serialize_or_sentinel<S>(field: &ExtractedField, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(field.or_sentinel())
}

impl Serialize for ExtractedField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}
