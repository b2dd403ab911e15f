//! Configuration for shelfmark-core
//!
//! A single setting today: where the library file lives. Kept as a struct
//! so new fields can default for existing config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Explicit path to the library JSON file; `None` selects the
    /// platform default location.
    pub data_file: Option<PathBuf>,
}

impl LibraryConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Resolve the library file path.
    ///
    /// An explicit `data_file` wins. Otherwise the platform data directory
    /// is used (`~/.local/share/shelfmark/library.json` on Linux), falling
    /// back to `library.json` in the working directory when no data
    /// directory is known.
    pub fn resolve_data_file(&self) -> PathBuf {
        if let Some(ref path) = self.data_file {
            return path.clone();
        }

        dirs::data_dir()
            .map(|d| d.join("shelfmark").join("library.json"))
            .unwrap_or_else(|| PathBuf::from("library.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves_to_a_library_json() {
        let config = LibraryConfig::default();
        let path = config.resolve_data_file();
        assert_eq!(path.file_name().unwrap(), "library.json");
    }

    #[test]
    fn explicit_path_wins() {
        let config = LibraryConfig {
            data_file: Some(PathBuf::from("/tmp/books.json")),
        };
        assert_eq!(config.resolve_data_file(), PathBuf::from("/tmp/books.json"));
    }

    #[test]
    fn json_round_trip() {
        let config = LibraryConfig {
            data_file: Some(PathBuf::from("books.json")),
        };
        let json = config.to_json().unwrap();
        let parsed = LibraryConfig::from_json(&json).unwrap();
        assert_eq!(parsed.data_file, config.data_file);
    }
}
