//! Denormalized attribute values.

use serde::{Deserialize, Serialize};

/// A product attribute value reconstructed from a flat field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Boolean(bool),
}
