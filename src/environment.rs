// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::DEFAULT_IMAGE_PROXY_ENDPOINT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub output_path: PathBuf,
    #[serde(default = "default_image_proxy_endpoint")]
    pub image_proxy_endpoint: String,
    #[serde(default = "default_template")]
    pub default_template: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

fn default_image_proxy_endpoint() -> String {
    DEFAULT_IMAGE_PROXY_ENDPOINT.to_string()
}

fn default_template() -> String {
    "modern".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("out"),
            image_proxy_endpoint: default_image_proxy_endpoint(),
            default_template: default_template(),
            default_locale: default_locale(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load `config.yaml` from the current directory for the active environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.yaml"))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        if !config_path.exists() {
            warn!(
                "{} not found, using built-in defaults",
                config_path.display()
            );
            return Self::resolve(Self::default());
        }

        let config_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_yaml(&config_content, &environment)
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse config.yaml")?;

        let env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Self::resolve(env_config)
    }

    fn get_environment() -> String {
        std::env::var("CV_RENDER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn resolve(config: Self) -> Result<Self> {
        Ok(Self {
            output_path: Self::resolve_path(&config.output_path)?,
            ..config
        })
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}
