//! Dev refresh - reset a local streetcrm SQLite database and restart the dev server
//!
//! Checks that it is safe to proceed, deletes the database file, then runs
//! the management commands that rebuild and reseed it, stopping at the first
//! step that fails.

pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod preflight;
pub mod settings;

pub use config::{load_config, Config, ManagementConfig};
pub use error::{RefreshError, Result};
pub use io::{CommandRunner, EnvSource, ProcessEnv, StepCommand, TokioCommandRunner};
pub use preflight::RefreshTarget;

use std::path::PathBuf;

use tracing::info;

/// Per-invocation switches from the command line
#[derive(Debug, Clone, Default)]
pub struct RefreshOptions {
    /// Application config file, overriding the environment and tool config
    pub app_config: Option<PathBuf>,
    /// Check preconditions and report the plan without changing anything
    pub dry_run: bool,
}

/// What a refresh deletes and runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshPlan {
    pub target: RefreshTarget,
    pub steps: Vec<StepCommand>,
}

/// Run the preflight gates and build the step list
pub fn plan(config: &Config, options: &RefreshOptions, env: &dyn EnvSource) -> Result<RefreshPlan> {
    let target = preflight::check(config, options.app_config.as_deref(), env)?;
    let steps = pipeline::refresh_steps(&config.management);
    Ok(RefreshPlan { target, steps })
}

/// Reset the database and run every management step
///
/// Nothing is deleted or run unless all preflight gates pass. A dry run
/// returns the plan after the preflight.
pub async fn refresh(
    config: &Config,
    options: &RefreshOptions,
    env: &dyn EnvSource,
    runner: &dyn CommandRunner,
) -> Result<RefreshPlan> {
    let plan = plan(config, options, env)?;

    if options.dry_run {
        info!("Dry run, leaving {} in place", plan.target.database.display());
        return Ok(plan);
    }

    pipeline::remove_database(&plan.target.database)?;
    pipeline::run_steps(runner, &plan.steps).await?;

    info!("Refresh complete");
    Ok(plan)
}
