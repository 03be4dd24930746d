pub mod catalogue;
pub mod config;
pub mod document;
pub mod index;
pub mod load;
pub mod repair;
pub mod richtext;
pub mod schema;
pub mod value;

use wasm_bindgen::prelude::*;

pub use catalogue::{Catalogue, CatalogueRecord, Category};
pub use config::MarkdownConfig;
pub use document::{AntipatternRenderer, RenderError};
pub use index::CatalogueRenderer;
pub use repair::repair_tables;
pub use schema::{ColumnDefinition, FieldDefinition, FieldType, Template};
pub use value::{FieldValue, FieldValues, RelationRow};

/// Render an antipattern page with the default configuration.
pub fn render_antipattern(
    template: &Template,
    values: &FieldValues,
) -> Result<String, RenderError> {
    AntipatternRenderer::default().render(values, &template.fields)
}

/// Render the catalogue page with the default configuration.
pub fn render_catalogue(catalogue: &Catalogue) -> String {
    CatalogueRenderer::default().render_default_home(catalogue)
}

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = "repairMarkdownTables")]
pub fn repair_markdown_tables(markdown: &str) -> String {
    repair_tables(markdown)
}

/// Render an antipattern page from a JSON template and JSON field values.
#[wasm_bindgen(js_name = "antipatternToMarkdown")]
pub fn antipattern_to_markdown(template_json: &str, values_json: &str) -> Result<String, String> {
    let template = load::template_from_json(template_json).map_err(|e| e.to_string())?;
    let values = load::values_from_json(values_json).map_err(|e| e.to_string())?;
    render_antipattern(&template, &values).map_err(|e| e.to_string())
}

/// Render the catalogue page from JSON categories.
#[wasm_bindgen(js_name = "catalogueToMarkdown")]
pub fn catalogue_to_markdown(
    catalogue_json: &str,
    home_filename: Option<String>,
) -> Result<String, String> {
    let catalogue = load::catalogue_from_json(catalogue_json).map_err(|e| e.to_string())?;
    let renderer = CatalogueRenderer::default();

    Ok(match home_filename.as_deref() {
        Some(home) => renderer.render(&catalogue, home),
        None => renderer.render_default_home(&catalogue),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"{"fields": [
        {"name": "name", "displayText": "Name", "required": true, "type": "text"},
        {"name": "context", "displayText": "Context", "required": true, "type": "textarea"},
        {"name": "related", "displayText": "Related Anti-patterns", "type": "table",
         "columns": [{"displayText": "Anti-pattern"}, {"displayText": "Relation"}]}
    ]}"#;

    #[test]
    fn test_antipattern_to_markdown() {
        let values = r#"{
            "name": "Road to Nowhere",
            "context": "Planning is skipped.",
            "related": [{"antipattern": "Absentee", "relation": "related to"}]
        }"#;
        let md = antipattern_to_markdown(TEMPLATE, values).unwrap();
        let breadcrumb = "[Home](README.md) > [Catalogue](Catalogue.md) > Road to Nowhere\n";
        assert!(md.starts_with(breadcrumb));
        assert!(md.contains("## Related Anti-patterns (Optional)"));
        assert!(md.contains("|Absentee|related to|\n"));
    }

    #[test]
    fn test_antipattern_missing_value_reported() {
        let err = antipattern_to_markdown(TEMPLATE, r#"{"name": "Foo"}"#).unwrap_err();
        assert!(err.contains("context"));
    }

    #[test]
    fn test_catalogue_to_markdown() {
        let json = r#"[{"name": "Behavioral", "records": [{"antipatternName": "A"}]}]"#;
        let md = catalogue_to_markdown(json, Some("docs/index.md".to_string())).unwrap();
        assert!(md.starts_with("[Home](docs/index.md) > Catalogue\n"));
        assert!(md.ends_with("## Behavioral\nA\n\n"));
    }

    #[test]
    fn test_render_catalogue_default_home() {
        let mut catalogue = Catalogue::new();
        catalogue.push_record("Behavioral", CatalogueRecord::new("B", "b.md"));
        let md = render_catalogue(&catalogue);
        assert!(md.starts_with("[Home](README.md) > Catalogue\n"));
        assert!(md.contains("## Behavioral\n[B](b.md)\n\n"));
    }

    #[test]
    fn test_repair_binding() {
        assert_eq!(repair_markdown_tables("|--|--|"), "|---|---|\n");
    }
}
