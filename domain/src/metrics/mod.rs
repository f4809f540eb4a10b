//! Metrics subdomain
//!
//! Static evaluation tables comparing the two models per subject.

pub mod catalog;
pub mod entities;
