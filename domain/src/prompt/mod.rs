//! Prompt domain
//!
//! The single instruction template shared by the hosted and local model.

mod template;

pub use template::{Prompt, PromptTemplate};
