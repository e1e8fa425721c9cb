use std::path::Path;

use config::Config;
use serde::{Deserialize, Serialize};

use super::AppError;
use crate::client::TargomoClientConfig;

/// environment variables named `ISOREACH__<SECTION>__<KEY>` override the file
pub const ENV_PREFIX: &str = "ISOREACH";

/// static point datasets used by the travel-times and polygon-filtering demos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// OSM public beaches, used as sources
    pub sources_url: String,
    /// OSM building=house, used as targets
    pub targets_url: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            sources_url: String::from("https://raw.githubusercontent.com/targomo/data-exports/master/overpass/beach_public_lerici.geojson"),
            targets_url: String::from("https://raw.githubusercontent.com/targomo/data-exports/master/overpass/building_house_lerici.geojson"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub client: TargomoClientConfig,
    pub datasets: DatasetConfig,
}

impl AppConfig {
    /// reads the optional TOML file, then applies environment overrides.
    /// anything left unset keeps its default.
    pub fn load(config_filepath: Option<&Path>) -> Result<AppConfig, AppError> {
        let mut builder = Config::builder();
        if let Some(path) = config_filepath {
            let path_str = path.to_str().ok_or_else(|| AppError::ReadError {
                filepath: path.display().to_string(),
                error: String::from("path is not valid unicode"),
            })?;
            builder = builder.add_source(config::File::new(path_str, config::FileFormat::Toml));
        }
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(|e| AppError::ConfigReadError {
                msg: String::from("failed reading isoreach configuration"),
                source: e,
            })?;
        let app_config =
            config
                .try_deserialize::<AppConfig>()
                .map_err(|e| AppError::ConfigReadError {
                    msg: String::from("failed decoding isoreach configuration"),
                    source: e,
                })?;
        log::debug!(
            "using region '{}' at {}",
            app_config.client.region,
            app_config.client.base_url
        );
        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DatasetConfig};

    #[test]
    fn test_load_toml_keeps_defaults_for_missing_sections() {
        let path = std::env::temp_dir().join(format!(
            "isoreach-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[client]\napi_key = \"abc123\"\nregion = \"northamerica\"\n",
        )
        .unwrap();
        let config = AppConfig::load(Some(path.as_path())).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.client.api_key, "abc123");
        assert_eq!(config.client.region, "northamerica");
        assert_eq!(config.client.timeout_secs, 60);
        assert_eq!(config.datasets, DatasetConfig::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("isoreach-config-does-not-exist.toml");
        assert!(AppConfig::load(Some(path.as_path())).is_err());
    }
}
