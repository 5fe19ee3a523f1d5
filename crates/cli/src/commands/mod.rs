//! CLI command handlers

pub mod generate;
pub mod summary;
