//! CLI library components for the catalog builder.

pub mod commands;
pub mod logging;
pub mod types;
