//! Evaluation dashboard served over HTTP
//!
//! One HTML page with three tabs backed by a small JSON API:
//!
//! - `GET /api/subjects`: final score of each subject
//! - `GET /api/metrics`, `GET /api/metrics/:subject`: formatted tables and chart series
//! - `POST /api/compare`: ask both models one question

pub mod handlers;
pub mod page;
pub mod server;

pub use server::{DashboardServer, ServerError, router};
