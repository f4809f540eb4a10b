//! Use cases (application services)

pub mod invoke_model;
pub mod run_comparison;
