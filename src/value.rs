//! Values captured for a template's fields.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::schema::FieldType;

/// One row of a relation table: the related antipattern and how it relates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRow {
    pub antipattern: String,
    pub relation: String,
}

impl RelationRow {
    /// Cells per row: target name and relation kind.
    pub const CELLS: usize = 2;

    pub fn new(antipattern: impl Into<String>, relation: impl Into<String>) -> Self {
        Self {
            antipattern: antipattern.into(),
            relation: relation.into(),
        }
    }
}

/// In JSON a text value is a string and a table value is an array of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Table(Vec<RelationRow>),
}

impl FieldValue {
    /// Placeholder for an optional field left blank.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Table(_) => "table",
        }
    }

    /// Whether this value can fill a field declared as `field_type`.
    ///
    /// A blank text value also stands in for an optional table that was
    /// left empty; callers decide whether the field is optional.
    pub fn fits(&self, field_type: FieldType) -> bool {
        match (self, field_type) {
            (Self::Text(_), t) if t.is_textual() => true,
            (Self::Table(_), FieldType::Table) => true,
            (Self::Text(s), FieldType::Table) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<RelationRow>> for FieldValue {
    fn from(rows: Vec<RelationRow>) -> Self {
        Self::Table(rows)
    }
}

/// Field name to captured value, built fresh for each render.
pub type FieldValues = HashMap<String, FieldValue>;
