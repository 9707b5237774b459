//! Flat (CSV) attribute-value denormalizers.
//!
//! A denormalizer turns one tabular field back into a typed attribute value.
//! Each instance is configured at construction with the attribute types it
//! handles; the format side of the predicate is fixed, flat import only ever
//! speaks CSV.

use openpim_core::{DomainError, DomainResult};

use crate::value::AttributeValue;

/// The single format flat denormalizers understand.
pub const CSV_FORMAT: &str = "csv";

const SUPPORTED_FORMATS: [&str; 1] = [CSV_FORMAT];

/// Base contract for flat value denormalizers.
///
/// `supports_denormalization` is a pure predicate used by the surrounding
/// serializer to pick the right decoder; `denormalize` does the actual
/// field-to-value mapping. An empty flat field denormalizes to `None`.
pub trait FlatValueDenormalizer {
    /// Attribute types this instance decodes. Fixed at construction.
    fn supported_types(&self) -> &[String];

    /// Map one flat field to a typed value; `None` for an empty field.
    fn denormalize(&self, field: &str, attribute_type: &str)
    -> DomainResult<Option<AttributeValue>>;

    /// True iff this instance decodes `attribute_type` and `format` is a
    /// supported flat format.
    fn supports_denormalization(&self, attribute_type: &str, format: &str) -> bool {
        self.supported_types().iter().any(|t| t == attribute_type)
            && SUPPORTED_FORMATS.contains(&format)
    }
}

fn to_owned_types(types: &[&str]) -> Vec<String> {
    types.iter().map(|t| (*t).to_owned()).collect()
}

/// Passes text fields through unchanged.
#[derive(Debug, Clone)]
pub struct TextValueDenormalizer {
    supported_types: Vec<String>,
}

impl TextValueDenormalizer {
    pub fn new(supported_types: &[&str]) -> Self {
        Self {
            supported_types: to_owned_types(supported_types),
        }
    }
}

impl FlatValueDenormalizer for TextValueDenormalizer {
    fn supported_types(&self) -> &[String] {
        &self.supported_types
    }

    fn denormalize(
        &self,
        field: &str,
        _attribute_type: &str,
    ) -> DomainResult<Option<AttributeValue>> {
        if field.is_empty() {
            return Ok(None);
        }
        Ok(Some(AttributeValue::Text(field.to_owned())))
    }
}

/// Parses numeric fields (prices, metrics, plain numbers).
#[derive(Debug, Clone)]
pub struct NumberValueDenormalizer {
    supported_types: Vec<String>,
}

impl NumberValueDenormalizer {
    pub fn new(supported_types: &[&str]) -> Self {
        Self {
            supported_types: to_owned_types(supported_types),
        }
    }
}

impl FlatValueDenormalizer for NumberValueDenormalizer {
    fn supported_types(&self) -> &[String] {
        &self.supported_types
    }

    fn denormalize(
        &self,
        field: &str,
        attribute_type: &str,
    ) -> DomainResult<Option<AttributeValue>> {
        if field.is_empty() {
            return Ok(None);
        }
        let number: f64 = field.parse().map_err(|_| {
            DomainError::validation(format!(
                "cannot denormalize \"{field}\" as a number for attribute type \"{attribute_type}\""
            ))
        })?;
        Ok(Some(AttributeValue::Number(number)))
    }
}

/// Parses boolean fields ("1"/"0"/"true"/"false").
#[derive(Debug, Clone)]
pub struct BooleanValueDenormalizer {
    supported_types: Vec<String>,
}

impl BooleanValueDenormalizer {
    pub fn new(supported_types: &[&str]) -> Self {
        Self {
            supported_types: to_owned_types(supported_types),
        }
    }
}

impl FlatValueDenormalizer for BooleanValueDenormalizer {
    fn supported_types(&self) -> &[String] {
        &self.supported_types
    }

    fn denormalize(
        &self,
        field: &str,
        attribute_type: &str,
    ) -> DomainResult<Option<AttributeValue>> {
        match field {
            "" => Ok(None),
            "1" | "true" => Ok(Some(AttributeValue::Boolean(true))),
            "0" | "false" => Ok(Some(AttributeValue::Boolean(false))),
            other => Err(DomainError::validation(format!(
                "cannot denormalize \"{other}\" as a boolean for attribute type \"{attribute_type}\""
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_only_configured_types_and_the_csv_format() {
        let denormalizer = NumberValueDenormalizer::new(&["pim_catalog_price", "pim_catalog_number"]);

        assert!(denormalizer.supports_denormalization("pim_catalog_price", "csv"));
        assert!(denormalizer.supports_denormalization("pim_catalog_number", "csv"));
        assert!(!denormalizer.supports_denormalization("pim_catalog_text", "csv"));
        // Only the flat/CSV format is ever supported.
        assert!(!denormalizer.supports_denormalization("pim_catalog_price", "xml"));
        assert!(!denormalizer.supports_denormalization("pim_catalog_price", "json"));
    }

    #[test]
    fn empty_fields_denormalize_to_none() {
        let text = TextValueDenormalizer::new(&["pim_catalog_text"]);
        let number = NumberValueDenormalizer::new(&["pim_catalog_number"]);
        let boolean = BooleanValueDenormalizer::new(&["pim_catalog_boolean"]);

        assert_eq!(text.denormalize("", "pim_catalog_text").unwrap(), None);
        assert_eq!(number.denormalize("", "pim_catalog_number").unwrap(), None);
        assert_eq!(boolean.denormalize("", "pim_catalog_boolean").unwrap(), None);
    }

    #[test]
    fn text_passes_through() {
        let denormalizer = TextValueDenormalizer::new(&["pim_catalog_text"]);

        assert_eq!(
            denormalizer.denormalize("Blue sneaker", "pim_catalog_text").unwrap(),
            Some(AttributeValue::Text("Blue sneaker".into()))
        );
    }

    #[test]
    fn numbers_parse_or_fail_with_validation() {
        let denormalizer = NumberValueDenormalizer::new(&["pim_catalog_number"]);

        assert_eq!(
            denormalizer.denormalize("42.5", "pim_catalog_number").unwrap(),
            Some(AttributeValue::Number(42.5))
        );
        assert!(matches!(
            denormalizer
                .denormalize("not-a-number", "pim_catalog_number")
                .unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn booleans_accept_flat_spellings() {
        let denormalizer = BooleanValueDenormalizer::new(&["pim_catalog_boolean"]);

        assert_eq!(
            denormalizer.denormalize("1", "pim_catalog_boolean").unwrap(),
            Some(AttributeValue::Boolean(true))
        );
        assert_eq!(
            denormalizer.denormalize("false", "pim_catalog_boolean").unwrap(),
            Some(AttributeValue::Boolean(false))
        );
        assert!(denormalizer.denormalize("yes", "pim_catalog_boolean").is_err());
    }
}
