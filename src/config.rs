//! Fixed names and tokens used when generating catalogue pages.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Line break must be \"\\n\" or \"\\r\\n\", got {0:?}")]
    InvalidLineBreak(String),
    #[error("Config key `{0}` must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub app_name: String,
    /// Home page, linked from every breadcrumb.
    pub home_filename: String,
    pub catalogue_filename: String,
    pub catalogue_folder: String,
    pub template_filename: String,
    /// Appended twice to separate blocks by one blank line.
    pub line_break: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            app_name: "Software Process Antipatterns Catalogue".to_string(),
            home_filename: "README.md".to_string(),
            catalogue_filename: "Catalogue.md".to_string(),
            catalogue_folder: "catalogue".to_string(),
            template_filename: "template.md".to_string(),
            line_break: "\n".to_string(),
        }
    }
}

impl MarkdownConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_break != "\n" && self.line_break != "\r\n" {
            return Err(ConfigError::InvalidLineBreak(self.line_break.clone()));
        }

        let names = [
            ("app_name", &self.app_name),
            ("home_filename", &self.home_filename),
            ("catalogue_filename", &self.catalogue_filename),
            ("catalogue_folder", &self.catalogue_folder),
            ("template_filename", &self.template_filename),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(key));
            }
        }

        Ok(())
    }

    /// Link target of the template page, relative to the catalogue page.
    pub fn template_path(&self) -> String {
        format!("{}/{}", self.catalogue_folder, self.template_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MarkdownConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.template_path(), "catalogue/template.md");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MarkdownConfig::from_toml_str(
            r#"
            app_name = "Process Smells"
            catalogue_folder = "smells"
            "#,
        )
        .unwrap();
        assert_eq!(config.app_name, "Process Smells");
        assert_eq!(config.template_path(), "smells/template.md");
        assert_eq!(config.home_filename, "README.md");
    }

    #[test]
    fn test_rejects_bad_line_break() {
        let err = MarkdownConfig::from_toml_str(r#"line_break = "<br>""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLineBreak(s) if s == "<br>"));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = MarkdownConfig::from_toml_str(r#"home_filename = """#).unwrap_err();
        assert!(matches!(err, ConfigError::Empty("home_filename")));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            MarkdownConfig::from_toml_str("app_name = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = MarkdownConfig::load(Path::new("/nonexistent/antipattern-md.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
