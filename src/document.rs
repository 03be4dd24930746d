//! Markdown page for a single antipattern.

use crate::config::{ConfigError, MarkdownConfig};
use crate::schema::{ColumnDefinition, FieldDefinition, FieldType, SchemaError, validate_fields};
use crate::value::{FieldValue, FieldValues, RelationRow};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid template: {0}")]
    Schema(#[from] SchemaError),
    #[error("No value captured for field `{0}`")]
    MissingValue(String),
    #[error("Field `{field}` is declared {expected} but holds a {found} value")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: &'static str,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AntipatternRenderer {
    config: MarkdownConfig,
}

impl AntipatternRenderer {
    pub fn new(config: MarkdownConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Render the page for one antipattern.
    ///
    /// `fields` must start with the text field holding the antipattern's
    /// name, and `values` must hold a value of matching type for every
    /// field. Nothing is rendered unless both hold.
    pub fn render(
        &self,
        values: &FieldValues,
        fields: &[FieldDefinition],
    ) -> Result<String, RenderError> {
        let (name, rest) = resolve(values, fields)?;
        let lb = self.config.line_break.as_str();
        let mut md = String::new();

        md.push_str(&format!(
            "[Home]({}) > [Catalogue]({}) > ",
            self.config.home_filename, self.config.catalogue_filename
        ));
        md.push_str(name);
        md.push_str(&lb.repeat(3));
        md.push_str("# ");
        md.push_str(name);

        for (field, value) in &rest {
            md.push_str(&lb.repeat(2));
            self.render_field(&mut md, field, value);
        }

        log::debug!(
            "Rendered antipattern page ({} fields, {} bytes)",
            rest.len() + 1,
            md.len()
        );
        Ok(md)
    }

    fn render_field(&self, md: &mut String, field: &FieldDefinition, value: &FieldValue) {
        let lb = self.config.line_break.as_str();

        md.push_str("## ");
        md.push_str(&field.display_text);
        if !field.required {
            md.push_str(" (Optional)");
        }
        md.push_str(&lb.repeat(2));

        match value {
            FieldValue::Text(text) => md.push_str(text),
            FieldValue::Table(rows) => {
                md.push_str(&render_table_header(&field.columns, lb));
                for row in rows {
                    render_relation_row(md, row, lb);
                }
            }
        }
    }
}

/// Column titles followed by a `---` separator cell per column.
pub fn render_table_header(columns: &[ColumnDefinition], line_break: &str) -> String {
    let mut header = String::from("|");
    for column in columns {
        header.push_str(&column.display_text);
        header.push('|');
    }
    header.push_str(line_break);

    header.push('|');
    header.push_str(&"---|".repeat(columns.len()));
    header.push_str(line_break);
    header
}

// Relation targets stay plain text; pages for them may not exist yet.
fn render_relation_row(md: &mut String, row: &RelationRow, line_break: &str) {
    md.push('|');
    md.push_str(&row.antipattern);
    md.push('|');
    md.push_str(&row.relation);
    md.push('|');
    md.push_str(line_break);
}

type Resolved<'a> = (&'a str, Vec<(&'a FieldDefinition, &'a FieldValue)>);

/// Pair every field with its value, checking presence and type.
///
/// Returns the antipattern's name and the fields that follow it.
fn resolve<'a>(
    values: &'a FieldValues,
    fields: &'a [FieldDefinition],
) -> Result<Resolved<'a>, RenderError> {
    validate_fields(fields)?;

    let mut resolved = fields
        .iter()
        .map(|field| {
            let value = values
                .get(&field.name)
                .ok_or_else(|| RenderError::MissingValue(field.name.clone()))?;

            // A blank text value only stands in for an optional table.
            let blank_table = field.field_type == FieldType::Table
                && matches!(value, FieldValue::Text(_));
            if !value.fits(field.field_type) || (blank_table && field.required) {
                return Err(mismatch(field, value));
            }
            Ok((field, value))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (name_field, name_value) = resolved.remove(0);
    let name = match name_value {
        FieldValue::Text(name) => name.as_str(),
        FieldValue::Table(_) => return Err(mismatch(name_field, name_value)),
    };
    Ok((name, resolved))
}

fn mismatch(field: &FieldDefinition, value: &FieldValue) -> RenderError {
    RenderError::TypeMismatch {
        field: field.name.clone(),
        expected: field.field_type,
        found: value.kind(),
    }
}
