//! Loads the substitution table from a project configuration file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::types::Substitutions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    substitutions: Substitutions,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Read the `[substitutions]` table from a TOML config file.
    ///
    /// A file without a `[substitutions]` table yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file is missing, unreadable, or
    /// not valid TOML.
    pub fn load(path: &Path) -> Result<Substitutions, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        debug!(entries = cf.substitutions.len(), "loaded substitution table");
        Ok(cf.substitutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_substitutions_table() {
        let file = write_config(
            r#"
[substitutions]
open01 = "2020-01-03 12:00"
close01 = "2020-01-17 18:00"
"#,
        );
        let subs = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(subs.get("open01"), Some("2020-01-03 12:00"));
        assert_eq!(subs.get("close01"), Some("2020-01-17 18:00"));
    }

    #[test]
    fn missing_table_yields_empty_substitutions() {
        let file = write_config("# nothing here\n");
        let subs = ConfigLoader::load(file.path()).unwrap();
        assert!(subs.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = ConfigLoader::load(Path::new("/nonexistent/coursemeta.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let file = write_config("[substitutions\nbroken");
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(..)));
    }
}
