use std::path::Path;

use serde::{Deserialize, Serialize};

/// Runtime options for decoding and BOM extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Vendor marker that identifies rows of interest in a BOM description
    /// field (matched case-insensitively).
    pub marker: String,

    /// Header name of the BOM description column.
    pub description_column: String,

    /// Header name of the BOM quantity column.
    ///
    /// Rows without this column, or with a blank value in it, default to a
    /// quantity of 1.
    pub quantity_column: String,

    /// Whether an unrecognised alteration code fails the whole decode
    /// instead of being reported as an `Unknown` entry.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            description_column: default_description_column(),
            quantity_column: default_quantity_column(),
            strict: false,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or the
    /// file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        Ok(std::fs::write(path, content)?)
    }
}

/// Errors from loading or saving a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read or written.
    #[error("failed to access config file")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration TOML.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

fn default_marker() -> String {
    "Misumi".to_string()
}

fn default_description_column() -> String {
    "Description".to_string()
}

fn default_quantity_column() -> String {
    "Qty".to_string()
}

/// The serialized versions of the configuration.
/// This allows future changes to the file format and to the domain type
/// without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_marker")]
        marker: String,

        #[serde(default = "default_description_column")]
        description_column: String,

        #[serde(default = "default_quantity_column")]
        quantity_column: String,

        #[serde(default)]
        strict: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                marker,
                description_column,
                quantity_column,
                strict,
            } => Self {
                marker,
                description_column,
                quantity_column,
                strict,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            marker: config.marker,
            description_column: config.description_column,
            quantity_column: config.quantity_column,
            strict: config.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nmarker = \"Acme\"\ndescription_column = \"Part\"\nquantity_column = \"Count\"\nstrict = true\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.marker, "Acme");
        assert_eq!(config.description_column, "Part");
        assert_eq!(config.quantity_column, "Count");
        assert!(config.strict);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        assert!(matches!(Config::load(&missing), Err(Error::Io(_))));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nstrict = \"sometimes\"\n")
            .unwrap();

        assert!(matches!(Config::load(file.path()), Err(Error::Parse(_))));
    }

    #[test]
    fn version_only_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_load_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let config = Config {
            marker: "Misumi".to_string(),
            description_column: "Description".to_string(),
            quantity_column: "Quantity".to_string(),
            strict: true,
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
