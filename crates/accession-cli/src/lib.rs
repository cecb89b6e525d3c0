//! CLI library components for the accession batch jobs.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
