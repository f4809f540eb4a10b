//! Progress reporting while the two models run

pub mod reporter;
