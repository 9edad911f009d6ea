//! BDD test world for dev-refresh

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cucumber::World;
use dev_refresh::{CommandRunner, EnvSource, StepCommand};

/// Environment backed by a map
#[derive(Debug, Default, Clone)]
pub struct MapEnv(pub HashMap<String, String>);

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Runner that records commands instead of spawning them
#[derive(Debug, Default, Clone)]
pub struct RecordingRunner {
    pub ran: Arc<Mutex<Vec<String>>>,
    /// Exit codes for specific step labels; every other step succeeds
    pub exit_codes: HashMap<String, i32>,
}

impl RecordingRunner {
    pub fn labels(&self) -> Vec<String> {
        self.ran.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &StepCommand) -> dev_refresh::Result<i32> {
        self.ran.lock().unwrap().push(command.label.clone());
        Ok(self.exit_codes.get(&command.label).copied().unwrap_or(0))
    }
}

#[derive(Debug, Default, World)]
pub struct RefreshWorld {
    pub dir: Option<tempfile::TempDir>,
    pub env: MapEnv,
    pub runner: RecordingRunner,
    pub app_config: Option<PathBuf>,
    pub fixtures: Option<Vec<String>>,
    pub dry_run: bool,
    pub result: Option<dev_refresh::Result<dev_refresh::RefreshPlan>>,
}

impl RefreshWorld {
    pub fn dir(&mut self) -> PathBuf {
        self.dir
            .get_or_insert_with(|| tempfile::tempdir().expect("failed to create temp dir"))
            .path()
            .to_path_buf()
    }

    pub fn database(&mut self) -> PathBuf {
        self.dir().join("dev.sqlite3")
    }
}
