pub mod cli;
pub mod commands;
pub mod config;

pub use commands::{execute, Outcome};
