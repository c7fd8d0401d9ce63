// Re-export internal modules for integration tests and external crate use.
pub mod api;
pub mod browser;
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod manifest;
pub mod shell;
pub mod split;
