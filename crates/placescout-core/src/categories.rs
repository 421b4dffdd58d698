use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One search category: a report label mapped to an upstream place type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Key used in the output document, e.g. `"hotels"`.
    pub label: String,
    /// Upstream `type` filter, e.g. `"lodging"`.
    pub place_type: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<Category>,
}

impl CategoriesFile {
    /// Enabled categories in file order, optionally narrowed to one label.
    ///
    /// A label filter selects the category even when it is disabled, so a
    /// single category can be run on demand.
    pub fn selected<'a>(&'a self, label: Option<&'a str>) -> impl Iterator<Item = &'a Category> {
        self.categories.iter().filter(move |c| match label {
            Some(wanted) => c.label.eq_ignore_ascii_case(wanted),
            None => c.enabled,
        })
    }
}

/// Load and validate the categories configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_categories(&content)
}

fn parse_categories(content: &str) -> Result<CategoriesFile, ConfigError> {
    let file: CategoriesFile =
        serde_yaml::from_str(content).map_err(ConfigError::CategoriesFileParse)?;
    validate_categories(&file)?;
    Ok(file)
}

fn validate_categories(file: &CategoriesFile) -> Result<(), ConfigError> {
    let mut seen_labels = HashSet::new();

    for category in &file.categories {
        if category.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category label must be non-empty".to_string(),
            ));
        }

        if category.place_type.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' has an empty place_type",
                category.label
            )));
        }

        if !seen_labels.insert(category.label.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category label: '{}'",
                category.label
            )));
        }
    }

    Ok(())
}
