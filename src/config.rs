use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Wrap the converted fragment in a full HTML page.
    pub standalone: bool,
    pub lang: String,
    /// Fallback title when the document has no top-level heading.
    pub title: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            lang: "en".to_string(),
            title: "Untitled".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
