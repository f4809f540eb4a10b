//! Output formatting for comparison results

pub mod console;
