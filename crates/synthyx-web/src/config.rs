//! Configuration loading for Synthyx.
//! Reads synthyx.toml from the current directory or path in SYNTHYX_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub depict: DepictConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

fn default_dataset_path() -> String { "data/routes.json".to_string() }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepictConfig {
    #[serde(default = "default_depict_url")]
    pub base_url: String,
    #[serde(default = "default_depict_timeout")]
    pub timeout_secs: u64,
}

fn default_depict_url() -> String { "http://127.0.0.1:8080".to_string() }
fn default_depict_timeout() -> u64 { 30 }

impl Default for DepictConfig {
    fn default() -> Self {
        Self { base_url: default_depict_url(), timeout_secs: default_depict_timeout() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins permitted to call the API with credentials.
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
}

fn default_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { origins: default_origins() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Pin every tree to this root SMILES instead of deriving the root
    /// from each route's final product.
    #[serde(default)]
    pub root_smiles: Option<String>,
}

impl Config {
    /// Load configuration from synthyx.toml.
    /// Checks SYNTHYX_CONFIG env var first, then the current directory.
    /// Every field has a default, so a missing file boots the built-ins.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("SYNTHYX_CONFIG")
            .unwrap_or_else(|_| "synthyx.toml".to_string());

        if !Path::new(&path).exists() {
            info!("no config file at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_local() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.cors.origins, vec!["http://localhost:3000"]);
        assert!(config.tree.root_smiles.is_none());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9001

            [tree]
            root_smiles = "O=C(Cn1nnc2ccccc21)N(Cc1ccsc1)c1ccc(Cl)cc1"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dataset.path, "data/routes.json");
        assert!(config.tree.root_smiles.is_some());
    }
}
