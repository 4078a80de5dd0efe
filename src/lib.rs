pub mod catalog;
pub mod config;
pub mod error;

// Matching engine
pub mod engine;

// JSON boundary
pub mod api;

// CLI
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
