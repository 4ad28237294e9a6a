//! Utility modules for common functionality
//!
//! This module provides logging setup, configuration and string helpers used
//! throughout the crate.

pub mod logger;
pub mod config;
pub(crate) mod string_utils;

pub use config::CliConfig;
