//! Configuration and logging.

pub mod config;
pub mod logging;
