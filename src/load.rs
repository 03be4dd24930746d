//! JSON decoding of renderer inputs.

use crate::catalogue::Catalogue;
use crate::schema::{SchemaError, Template};
use crate::value::FieldValues;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid template: {0}")]
    Schema(#[from] SchemaError),
}

/// Decode and validate a template.
pub fn template_from_json(json: &str) -> Result<Template, LoadError> {
    let template: Template = serde_json::from_str(json)?;
    template.validate()?;
    Ok(template)
}

pub fn values_from_json(json: &str) -> Result<FieldValues, LoadError> {
    Ok(serde_json::from_str(json)?)
}

pub fn catalogue_from_json(json: &str) -> Result<Catalogue, LoadError> {
    Ok(serde_json::from_str(json)?)
}
