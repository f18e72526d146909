//! Collaborator boundaries, configuration, and the command-line front end

/// Item catalog boundary and implementations
pub mod catalog;
/// Command-line interface
pub mod cli;
/// Engine constants and API base resolution
pub mod configuration;
/// Error types
pub mod error;
/// Terminal progress reporting
pub mod progress;
/// Outfit publishing boundary and implementations
pub mod share;
