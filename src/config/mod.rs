//! Configuration module for finman
//!
//! This module provides configuration management including:
//! - Base directory and database path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinmanPaths;
pub use settings::Settings;
