//! The destructive part of a refresh: delete the database, then run the
//! management commands one after another

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::ManagementConfig;
use crate::error::{RefreshError, Result};
use crate::io::{CommandRunner, StepCommand};

/// Build the management command sequence
///
/// `loaddata` is left out when no fixtures are configured.
pub fn refresh_steps(management: &ManagementConfig) -> Vec<StepCommand> {
    let step = |label: &str, args: &[&str]| {
        let mut full = vec![management.manage_script.display().to_string()];
        full.extend(args.iter().map(|a| a.to_string()));
        StepCommand {
            label: label.to_string(),
            program: management.python.clone(),
            args: full,
            working_dir: management.working_dir.clone(),
        }
    };

    let mut steps = vec![step("migrate auth", &["migrate", "auth"]), step("migrate", &["migrate"])];

    if !management.fixtures.is_empty() {
        let mut loaddata = step("loaddata", &["loaddata"]);
        loaddata.args.extend(management.fixtures.iter().cloned());
        steps.push(loaddata);
    }

    steps.push(step("buildwatson", &["buildwatson"]));
    steps.push(step("createsuperuser", &["createsuperuser"]));

    let mut runserver = step("runserver", &["runserver"]);
    runserver.args.extend(management.runserver_args.iter().cloned());
    steps.push(runserver);

    steps
}

/// Delete the SQLite file
///
/// Returns false when there was nothing to delete.
pub fn remove_database(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            info!("Removed database {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Database {} does not exist, nothing to remove", path.display());
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Run each step to completion, stopping at the first failure
pub async fn run_steps(runner: &dyn CommandRunner, steps: &[StepCommand]) -> Result<()> {
    for (index, step) in steps.iter().enumerate() {
        info!("[{}/{}] {}", index + 1, steps.len(), step.label);
        debug!("Running: {}", step);

        let code = runner.run(step).await?;
        if code != 0 {
            return Err(RefreshError::StepFailed {
                step: step.label.clone(),
                code,
            });
        }
    }
    Ok(())
}
