//! Command handlers.
//!
//! This module contains handlers for the seed, generate, and show-config commands.

pub mod generate;
pub mod seed;
pub mod show_config;

pub use generate::run_generate;
pub use seed::{run_seed, write_report};
pub use show_config::render_config;
