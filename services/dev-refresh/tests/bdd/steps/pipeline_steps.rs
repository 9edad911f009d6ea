//! BDD step definitions for running the refresh pipeline

use cucumber::{gherkin::Step, given, then, when};

use dev_refresh::{refresh, Config, RefreshOptions};

use crate::world::RefreshWorld;

#[given(expr = "the step {string} exits with code {int}")]
fn step_exit_code(world: &mut RefreshWorld, label: String, code: i32) {
    world.runner.exit_codes.insert(label, code);
}

#[given("no fixtures are configured")]
fn no_fixtures(world: &mut RefreshWorld) {
    world.fixtures = Some(Vec::new());
}

#[given("a dry run")]
fn dry_run(world: &mut RefreshWorld) {
    world.dry_run = true;
}

#[when("the refresh runs")]
async fn refresh_runs(world: &mut RefreshWorld) {
    let mut config = Config::default();
    config.management.working_dir = Some(world.dir());
    if let Some(fixtures) = &world.fixtures {
        config.management.fixtures = fixtures.clone();
    }
    let options = RefreshOptions {
        app_config: world.app_config.clone(),
        dry_run: world.dry_run,
    };

    let result = refresh(&config, &options, &world.env, &world.runner).await;
    world.result = Some(result);
}

#[then("the refresh should succeed")]
fn refresh_succeeds(world: &mut RefreshWorld) {
    if let Some(Err(e)) = &world.result {
        panic!("refresh failed: {}", e);
    }
    assert!(world.result.is_some(), "refresh not run");
}

#[then("no commands should have run")]
fn no_commands(world: &mut RefreshWorld) {
    assert!(
        world.runner.labels().is_empty(),
        "unexpected commands: {:?}",
        world.runner.labels()
    );
}

#[then("these steps should have run in order:")]
fn steps_in_order(world: &mut RefreshWorld, step: &Step) {
    let expected: Vec<String> = step
        .table
        .as_ref()
        .expect("step table missing")
        .rows
        .iter()
        .map(|row| row[0].clone())
        .collect();
    assert_eq!(world.runner.labels(), expected);
}
