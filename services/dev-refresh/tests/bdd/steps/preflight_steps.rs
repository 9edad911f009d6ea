//! BDD step definitions for the preflight gates

use cucumber::{given, then};

use dev_refresh::RefreshError;

use crate::world::RefreshWorld;

#[given("an active virtual environment")]
fn active_virtualenv(world: &mut RefreshWorld) {
    world
        .env
        .0
        .insert("VIRTUAL_ENV".to_string(), "/home/dev/.venv".to_string());
}

#[given("no active virtual environment")]
fn no_virtualenv(world: &mut RefreshWorld) {
    world.env.0.remove("VIRTUAL_ENV");
}

#[given(expr = "an application config with engine {string}")]
fn app_config_with_engine(world: &mut RefreshWorld, engine: String) {
    let path = world.dir().join("config.ini");
    std::fs::write(
        &path,
        format!("[database]\nengine = {}\nname = dev.sqlite3\n", engine),
    )
    .expect("failed to write config");
    world.app_config = Some(path);
}

#[given("an application config without a database section")]
fn app_config_without_database(world: &mut RefreshWorld) {
    let path = world.dir().join("config.ini");
    std::fs::write(&path, "[general]\ndebug = true\n").expect("failed to write config");
    world.app_config = Some(path);
}

#[given("no application config file")]
fn no_app_config(world: &mut RefreshWorld) {
    world.app_config = Some(world.dir().join("missing.ini"));
}

#[given("an existing database file")]
fn existing_database(world: &mut RefreshWorld) {
    let db = world.database();
    std::fs::write(db, b"SQLite format 3").expect("failed to write database");
}

#[then(expr = "the refresh should fail with exit code {int}")]
fn fails_with_code(world: &mut RefreshWorld, code: u8) {
    match world.result.as_ref().expect("refresh not run") {
        Err(e) => assert_eq!(e.exit_code(), code, "error was: {}", e),
        Ok(_) => panic!("expected the refresh to fail"),
    }
}

#[then(expr = "the failure should be {string}")]
fn failure_kind(world: &mut RefreshWorld, kind: String) {
    let err = match world.result.as_ref().expect("refresh not run") {
        Err(e) => e,
        Ok(_) => panic!("expected the refresh to fail"),
    };
    let matched = match kind.as_str() {
        "no virtual environment" => matches!(err, RefreshError::VirtualEnvInactive(_)),
        "config file missing" => matches!(err, RefreshError::ConfigFileMissing(_)),
        "not sqlite" => matches!(err, RefreshError::NotSqlite(_)),
        "step failed" => matches!(err, RefreshError::StepFailed { .. }),
        other => panic!("Unknown failure kind: {}", other),
    };
    assert!(matched, "expected {}, got {:?}", kind, err);
}

#[then("the database file should still exist")]
fn database_exists(world: &mut RefreshWorld) {
    assert!(world.database().exists());
}

#[then("the database file should be gone")]
fn database_gone(world: &mut RefreshWorld) {
    assert!(!world.database().exists());
}
