//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Please enter a question first.")]
    EmptyQuestion,

    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    #[error("Invalid execution mode: {0}")]
    InvalidExecutionMode(String),
}
