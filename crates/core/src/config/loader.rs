//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed configuration
    pub schema: ConfigSchema,
    /// File the configuration was read from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used when none is present.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                let p = PathBuf::from(p);
                if !p.exists() {
                    return Err(Error::config_not_found(&p));
                }
                Some(p)
            }
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let local = [".restroom.toml", "restroom.toml", ".config/restroom.toml"]
        .into_iter()
        .map(PathBuf::from);

    let user = dirs::config_dir().map(|dir| dir.join("restroom-finder").join("config.toml"));

    local.chain(user).find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.api.timeout_secs, None);
        assert_eq!(config.schema.defaults.urgency, "normal");
        assert!(config.schema.location.pair().is_none());
    }

    #[test]
    fn test_config_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "http://192.168.1.87:5000/api"
timeout_secs = 5

[defaults]
urgency = "high"
preferences = ["wheelchair", "baby_changing"]

[location]
latitude = 33.6846
longitude = -117.8265
"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str()).unwrap();
        assert_eq!(
            config.schema.api.base_url.as_deref(),
            Some("http://192.168.1.87:5000/api")
        );
        assert_eq!(config.schema.api.timeout_secs, Some(5));
        assert_eq!(config.schema.defaults.urgency, "high");
        assert_eq!(config.schema.defaults.preferences.len(), 2);
        assert_eq!(config.schema.location.pair(), Some((33.6846, -117.8265)));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://localhost:5000/api\"").unwrap();

        let config = Config::load(file.path().to_str()).unwrap();
        assert_eq!(config.schema.api.timeout_secs, None);
        assert_eq!(config.schema.defaults.urgency, "normal");
    }

    #[test]
    fn test_half_location_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[location]\nlatitude = 33.0").unwrap();

        let config = Config::load(file.path().to_str()).unwrap();
        assert!(config.schema.location.pair().is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::load(Some("/definitely/not/here/restroom.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let err = Config::load(file.path().to_str()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }
}
