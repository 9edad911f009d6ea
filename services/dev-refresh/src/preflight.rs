//! Preconditions checked before anything destructive happens
//!
//! The gates run in order and the first failure stops the refresh:
//! an active virtualenv, an existing application config file, and a
//! `[database]` section that selects the SQLite backend.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{RefreshError, Result};
use crate::io::EnvSource;
use crate::settings::AppSettings;

/// What a passed preflight allows the pipeline to touch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTarget {
    pub app_config: PathBuf,
    /// SQLite file that will be deleted
    pub database: PathBuf,
}

/// Application config path: CLI flag, then the config env var, then the tool config
pub fn resolve_app_config(
    cli_override: Option<&Path>,
    config: &Config,
    env: &dyn EnvSource,
) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    env.var(&config.app_config_env)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| config.app_config.clone())
}

/// Run every gate and return the database the refresh may reset
pub fn check(
    config: &Config,
    cli_override: Option<&Path>,
    env: &dyn EnvSource,
) -> Result<RefreshTarget> {
    let venv = env
        .var(&config.virtualenv_var)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| RefreshError::VirtualEnvInactive(config.virtualenv_var.clone()))?;
    debug!("Virtual environment active at {}", venv);

    let app_config = resolve_app_config(cli_override, config, env);
    if !app_config.is_file() {
        return Err(RefreshError::ConfigFileMissing(app_config));
    }
    debug!("Using application config {}", app_config.display());

    let settings = AppSettings::load(&app_config)?;
    let database = settings.database.unwrap_or_default();
    if !database.is_sqlite() {
        return Err(RefreshError::NotSqlite(database.engine));
    }
    let name = database.name.ok_or(RefreshError::MissingDatabaseName)?;

    let database = match &config.management.working_dir {
        Some(dir) if Path::new(&name).is_relative() => dir.join(&name),
        _ => PathBuf::from(&name),
    };

    info!("Preflight passed, SQLite database at {}", database.display());
    Ok(RefreshTarget {
        app_config,
        database,
    })
}
