//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the hosted and local models being compared
//! - [`question::Question`]: a validated, non-empty math question
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
