//! Catalogue landing page listing every antipattern by category.

use crate::catalogue::{Catalogue, CatalogueRecord};
use crate::config::{ConfigError, MarkdownConfig};

#[derive(Debug, Clone, Default)]
pub struct CatalogueRenderer {
    config: MarkdownConfig,
}

impl CatalogueRenderer {
    pub fn new(config: MarkdownConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Render the catalogue page, linking back to `home_filename` as given.
    pub fn render(&self, catalogue: &Catalogue, home_filename: &str) -> String {
        let lb = self.config.line_break.as_str();
        let mut md = String::new();

        md.push_str(&format!("[Home]({}) > Catalogue", home_filename));
        md.push_str(lb);

        md.push_str("# ");
        md.push_str(&self.config.app_name);
        md.push_str(&lb.repeat(2));

        md.push_str(&format!(
            "[Template]({}) for new anti-pattern contents.",
            self.config.template_path()
        ));
        md.push_str(&lb.repeat(3));

        for category in catalogue.categories() {
            md.push_str("## ");
            md.push_str(&category.name);
            md.push_str(lb);

            // Every record, the last one included, is followed by a blank line.
            for record in &category.records {
                render_record(&mut md, record);
                md.push_str(&lb.repeat(2));
            }
        }

        log::debug!(
            "Rendered catalogue ({} categories, {} records)",
            catalogue.categories().len(),
            catalogue.record_count()
        );
        md
    }

    /// Render with the configured home page.
    pub fn render_default_home(&self, catalogue: &Catalogue) -> String {
        self.render(catalogue, &self.config.home_filename)
    }
}

fn render_record(md: &mut String, record: &CatalogueRecord) {
    if record.has_page() {
        md.push_str(&format!("[{}]({})", record.antipattern_name, record.path));
    } else {
        md.push_str(&record.antipattern_name);
    }
}
