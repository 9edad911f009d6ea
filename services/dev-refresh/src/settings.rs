//! Reader for the application's INI configuration file
//!
//! Only the `[database]` section matters here: its `engine` decides whether a
//! reset is allowed and its `name` is the SQLite file to remove.

use std::path::{Path, PathBuf};

use ini::Ini;

use crate::error::{RefreshError, Result};

/// Django backend identifier for SQLite
pub const SQLITE_ENGINE: &str = "django.db.backends.sqlite3";

/// Contents of the `[database]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub engine: Option<String>,
    pub name: Option<String>,
}

impl DatabaseSettings {
    pub fn is_sqlite(&self) -> bool {
        self.engine.as_deref() == Some(SQLITE_ENGINE)
    }
}

/// The parts of the application config the refresh depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub path: PathBuf,
    /// `None` when the file has no `[database]` section
    pub database: Option<DatabaseSettings>,
}

impl AppSettings {
    /// Read and parse the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RefreshError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &text)
    }

    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text).map_err(|e| RefreshError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let database = ini.section(Some("database")).map(|section| {
            let value = |key: &str| {
                section
                    .get(key)
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
            };
            DatabaseSettings {
                engine: value("engine"),
                name: value("name"),
            }
        });

        tracing::debug!("Parsed {}: database={:?}", path.display(), database);
        Ok(Self {
            path: path.to_path_buf(),
            database,
        })
    }
}
