use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Embedder-facing registry configuration.
///
/// Lets a host deployment disable specific namespaces before a set is
/// opened. Namespaces the document does not mention stay enabled.
#[derive(Debug, Default, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ModuleConfig {
    pub namespace: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl RegistryConfig {
    pub fn from_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            context: "registry config".to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            context: path.display().to_string(),
            source,
        })
    }

    pub fn is_enabled(&self, namespace: &str) -> bool {
        self.modules
            .iter()
            .find(|module| module.namespace == namespace)
            .map(|module| module.enabled)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_namespaces_default_to_enabled() {
        let config = RegistryConfig::from_str("").unwrap();
        assert!(config.is_enabled("sancus.core"));
    }

    #[test]
    fn listed_namespace_can_be_disabled() {
        let config = RegistryConfig::from_str(
            r#"
            [[modules]]
            namespace = "sancus.ev"
            enabled = false

            [[modules]]
            namespace = "sancus.core"
            "#,
        )
        .unwrap();

        assert!(!config.is_enabled("sancus.ev"));
        assert!(config.is_enabled("sancus.core"));
    }

    #[test]
    fn parse_errors_carry_context() {
        let err = RegistryConfig::from_str("modules = 3").unwrap_err();
        assert!(err.to_string().contains("registry config"));
    }
}
