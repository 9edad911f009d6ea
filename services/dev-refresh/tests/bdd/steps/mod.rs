//! BDD step definitions for dev-refresh

pub mod pipeline_steps;
pub mod preflight_steps;
