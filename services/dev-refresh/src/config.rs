//! Configuration for the dev refresh tool itself

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Environment variable that is set while a virtualenv is active
    #[serde(default = "default_virtualenv_var")]
    pub virtualenv_var: String,
    /// Environment variable that may name the application config file
    #[serde(default = "default_app_config_env")]
    pub app_config_env: String,
    /// Application config file used when neither the CLI nor the environment names one
    #[serde(default = "default_app_config")]
    pub app_config: PathBuf,
    #[serde(default)]
    pub management: ManagementConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            virtualenv_var: default_virtualenv_var(),
            app_config_env: default_app_config_env(),
            app_config: default_app_config(),
            management: ManagementConfig::default(),
        }
    }
}

/// How the application's management commands are invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagementConfig {
    #[serde(default = "default_python")]
    pub python: String,
    #[serde(default = "default_manage_script")]
    pub manage_script: PathBuf,
    /// Fixtures passed to `loaddata`, in order
    #[serde(default = "default_fixtures")]
    pub fixtures: Vec<String>,
    #[serde(default = "default_runserver_args")]
    pub runserver_args: Vec<String>,
    /// Directory the commands run in; the current directory when unset
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for ManagementConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            manage_script: default_manage_script(),
            fixtures: default_fixtures(),
            runserver_args: default_runserver_args(),
            working_dir: None,
        }
    }
}

/// Default environment variable naming the application config file
pub const APP_CONFIG_ENV: &str = "STREETCRM_CONFIG";

fn default_virtualenv_var() -> String {
    "VIRTUAL_ENV".to_string()
}

fn default_app_config_env() -> String {
    APP_CONFIG_ENV.to_string()
}

fn default_app_config() -> PathBuf {
    PathBuf::from("streetcrm/config.ini")
}

fn default_python() -> String {
    "python".to_string()
}

fn default_manage_script() -> PathBuf {
    PathBuf::from("manage.py")
}

fn default_fixtures() -> Vec<String> {
    vec!["sample_data".to_string()]
}

fn default_runserver_args() -> Vec<String> {
    vec!["--nothreading".to_string()]
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::RefreshError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
