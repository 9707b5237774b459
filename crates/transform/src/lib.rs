//! `openpim-transform` — flat (CSV) to attribute-value denormalization.

pub mod denormalizer;
pub mod value;

pub use denormalizer::{
    BooleanValueDenormalizer, CSV_FORMAT, FlatValueDenormalizer, NumberValueDenormalizer,
    TextValueDenormalizer,
};
pub use value::AttributeValue;
