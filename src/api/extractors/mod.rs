//! Custom request extractors.

mod validated_json;

pub(crate) use validated_json::first_validation_message;
pub use validated_json::{ApiJson, ValidatedJson};
