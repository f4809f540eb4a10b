//! Comparison subdomain: the result of asking both models one question.

pub mod mode;
pub mod value_objects;
