//! Dev refresh CLI
//!
//! Deletes the local SQLite database and rebuilds it with the management commands.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dev_refresh::{
    load_config, refresh, Config, ProcessEnv, RefreshOptions, RefreshPlan, TokioCommandRunner,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "dev-refresh")]
#[command(about = "Reset the local streetcrm database and restart the dev server")]
#[command(version)]
struct Args {
    /// Path to the tool's JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Application INI config (overrides STREETCRM_CONFIG and the tool config)
    #[arg(long)]
    app_config: Option<PathBuf>,

    /// Check preconditions and print the plan without deleting or running anything
    #[arg(long)]
    dry_run: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

fn print_plan(plan: &RefreshPlan) {
    println!("would remove {}", plan.target.database.display());
    for step in &plan.steps {
        println!("would run {}", step);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, app_config={:?}, dry_run={}, log_level={:?}",
        args.config,
        args.app_config,
        args.dry_run,
        args.log_level
    );

    let config = match &args.config {
        Some(config_path) => {
            tracing::debug!("Loading configuration from {:?}", config_path);
            match load_config(config_path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("{}", e);
                    eprintln!("dev-refresh: {}", e);
                    return ExitCode::from(e.exit_code());
                }
            }
        }
        None => {
            tracing::debug!("Using default configuration");
            Config::default()
        }
    };

    let options = RefreshOptions {
        app_config: args.app_config,
        dry_run: args.dry_run,
    };

    match refresh(&config, &options, &ProcessEnv, &TokioCommandRunner::new()).await {
        Ok(plan) => {
            if options.dry_run {
                print_plan(&plan);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("dev-refresh: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
