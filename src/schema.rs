//! Field schema of an antipattern template.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::value::RelationRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[serde(alias = "textfield")]
    Text,
    Textarea,
    Table,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Table => "table",
        }
    }

    /// Text and textarea fields both capture a single string.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Text | Self::Textarea)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub display_text: String,
}

impl ColumnDefinition {
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    pub display_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Only meaningful for table fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnDefinition>,
}

impl FieldDefinition {
    pub fn text(name: impl Into<String>, display_text: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            display_text: display_text.into(),
            required,
            field_type: FieldType::Text,
            columns: Vec::new(),
        }
    }

    pub fn textarea(
        name: impl Into<String>,
        display_text: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            field_type: FieldType::Textarea,
            ..Self::text(name, display_text, required)
        }
    }

    pub fn table(
        name: impl Into<String>,
        display_text: impl Into<String>,
        required: bool,
        columns: Vec<ColumnDefinition>,
    ) -> Self {
        Self {
            field_type: FieldType::Table,
            columns,
            ..Self::text(name, display_text, required)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Template has no fields, expected the name field first")]
    Empty,
    #[error("Name field `{field}` must be of type text, found {found}")]
    NameFieldNotText { field: String, found: FieldType },
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),
    #[error("Table field `{field}` declares {found} columns, relation rows have {expected}")]
    ColumnCount {
        field: String,
        expected: usize,
        found: usize,
    },
}

/// Ordered field list loaded once per template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Template {
    pub fields: Vec<FieldDefinition>,
}

impl Template {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    /// The field holding the antipattern's own name.
    pub fn name_field(&self) -> Option<&FieldDefinition> {
        self.fields.first()
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        validate_fields(&self.fields)
    }
}

/// Check the ordering and shape constraints the renderer relies on.
pub fn validate_fields(fields: &[FieldDefinition]) -> Result<(), SchemaError> {
    let name_field = fields.first().ok_or(SchemaError::Empty)?;
    if name_field.field_type != FieldType::Text {
        return Err(SchemaError::NameFieldNotText {
            field: name_field.name.clone(),
            found: name_field.field_type,
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField(field.name.clone()));
        }
        if field.field_type == FieldType::Table && field.columns.len() != RelationRow::CELLS {
            return Err(SchemaError::ColumnCount {
                field: field.name.clone(),
                expected: RelationRow::CELLS,
                found: field.columns.len(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("Anti-pattern"),
            ColumnDefinition::new("Relation"),
        ]
    }

    #[test]
    fn test_field_type_names() {
        let parsed: Vec<FieldType> =
            serde_json::from_str(r#"["text", "textfield", "textarea", "table"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![FieldType::Text, FieldType::Text, FieldType::Textarea, FieldType::Table]
        );
        assert_eq!(FieldType::Textarea.to_string(), "textarea");
    }

    #[test]
    fn test_valid_template() {
        let template = Template::new(vec![
            FieldDefinition::text("name", "Name", true),
            FieldDefinition::textarea("summary", "Summary", true),
            FieldDefinition::table("related", "Related Anti-patterns", false, relation_columns()),
        ]);
        assert_eq!(template.validate(), Ok(()));
        assert_eq!(template.name_field().map(|f| f.name.as_str()), Some("name"));
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(Template::default().validate(), Err(SchemaError::Empty));
    }

    #[test]
    fn test_name_field_must_be_text() {
        let fields = vec![
            FieldDefinition::textarea("name", "Name", true),
            FieldDefinition::text("summary", "Summary", true),
        ];
        assert_eq!(
            validate_fields(&fields),
            Err(SchemaError::NameFieldNotText {
                field: "name".to_string(),
                found: FieldType::Textarea,
            })
        );
    }

    #[test]
    fn test_duplicate_field() {
        let fields = vec![
            FieldDefinition::text("name", "Name", true),
            FieldDefinition::textarea("name", "Again", false),
        ];
        assert_eq!(
            validate_fields(&fields),
            Err(SchemaError::DuplicateField("name".to_string()))
        );
    }

    #[test]
    fn test_table_column_count() {
        let fields = vec![
            FieldDefinition::text("name", "Name", true),
            FieldDefinition::table(
                "related",
                "Related",
                false,
                vec![ColumnDefinition::new("Only")],
            ),
        ];
        assert!(matches!(
            validate_fields(&fields),
            Err(SchemaError::ColumnCount { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_deserialize_field() {
        let json = r#"{
            "name": "related",
            "displayText": "Related Anti-patterns",
            "type": "table",
            "columns": [{"displayText": "Anti-pattern"}, {"displayText": "Relation"}]
        }"#;
        let field: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(field.field_type, FieldType::Table);
        assert!(!field.required);
        assert_eq!(field.columns, relation_columns());
    }
}
