//! Catalogue records grouped by category.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueRecord {
    pub antipattern_name: String,
    /// Relative path of the antipattern page; empty when no page exists yet.
    #[serde(default)]
    pub path: String,
}

impl CatalogueRecord {
    pub fn new(antipattern_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            antipattern_name: antipattern_name.into(),
            path: path.into(),
        }
    }

    pub fn unlinked(antipattern_name: impl Into<String>) -> Self {
        Self::new(antipattern_name, "")
    }

    pub fn has_page(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub records: Vec<CatalogueRecord>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }
}

/// Categories and their records, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    categories: Vec<Category>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, or return the existing one with that name.
    pub fn category_mut(&mut self, name: &str) -> &mut Category {
        let idx = match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.categories.push(Category::new(name));
                self.categories.len() - 1
            }
        };
        &mut self.categories[idx]
    }

    pub fn push_record(&mut self, category: &str, record: CatalogueRecord) {
        self.category_mut(category).records.push(record);
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|c| c.records.len()).sum()
    }
}

impl From<Vec<Category>> for Catalogue {
    fn from(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut catalogue = Catalogue::new();
        catalogue.push_record("Organizational", CatalogueRecord::unlinked("Road to Nowhere"));
        catalogue.push_record(
            "Behavioral",
            CatalogueRecord::new("Bystander Apathy", "catalogue/Bystander_Apathy.md"),
        );
        catalogue.push_record("Organizational", CatalogueRecord::unlinked("Absentee"));

        let names: Vec<&str> = catalogue.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Organizational", "Behavioral"]);

        let organizational = catalogue.category("Organizational").unwrap();
        assert_eq!(organizational.records[0].antipattern_name, "Road to Nowhere");
        assert_eq!(organizational.records[1].antipattern_name, "Absentee");
        assert_eq!(catalogue.record_count(), 3);
    }

    #[test]
    fn test_has_page() {
        assert!(!CatalogueRecord::unlinked("A").has_page());
        assert!(CatalogueRecord::new("B", "b.md").has_page());
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let json = r#"[
            {"name": "Zeta", "records": [{"antipatternName": "A"}]},
            {"name": "Alpha", "records": [{"antipatternName": "B", "path": "b.md"}]},
            {"name": "Empty"}
        ]"#;
        let catalogue: Catalogue = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = catalogue.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Empty"]);
        assert_eq!(catalogue.categories()[0].records[0].path, "");
        assert!(catalogue.category("Empty").unwrap().records.is_empty());
    }
}
