use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ClientError, TargomoClient};

/// Serializable configuration for the Targomo client.
/// Builds to a [`TargomoClient`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TargomoClientConfig {
    /// service region, e.g. "westcentraleurope"
    pub region: String,
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for TargomoClientConfig {
    fn default() -> Self {
        Self {
            region: String::from("westcentraleurope"),
            api_key: String::new(),
            base_url: String::from("https://api.targomo.com/"),
            timeout_secs: 60,
        }
    }
}

impl TargomoClientConfig {
    pub fn build(&self) -> Result<TargomoClient, ClientError> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|source| ClientError::BuildError { source })?;
        Ok(TargomoClient::new(
            http,
            &self.base_url,
            &self.region,
            &self.api_key,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::TargomoClientConfig;
    use crate::client::ClientError;

    #[test]
    fn test_build_requires_api_key() {
        let config = TargomoClientConfig::default();
        assert!(matches!(config.build(), Err(ClientError::MissingApiKey)));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: TargomoClientConfig =
            serde_json::from_value(serde_json::json!({ "api_key": "abc" })).unwrap();
        assert_eq!(config.region, "westcentraleurope");
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.timeout_secs, 60);
    }
}
