use crate::geometry::MercatorParams;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub params: MercatorParams,
    pub format: OutputFormat,
    pub log_level: Option<String>,
}

impl Config {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.params.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.params, MercatorParams::default());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "format": "json", "params": { "max_level": 20 } }"#);
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.params.max_level, 20);
        assert_eq!(config.params.earth_radius, 6378137.0);
        assert_eq!(config.params.tile_pixels, 256);
    }

    #[test]
    fn test_invalid_params_in_file_are_rejected() {
        let file = write_config(r#"{ "params": { "earth_radius": 0 } }"#);
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("earth radius"));
    }

    #[test]
    fn test_unparseable_file() {
        let file = write_config("not json");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
