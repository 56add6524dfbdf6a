//! Input/output operations: CLI, configuration, errors, rendering, progress

/// Command-line interface and batch board generation
pub mod cli;
/// Board constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export
pub mod error;
/// Board rendering and PNG export
pub mod image;
/// Progress display for batch generation
pub mod progress;
/// Frame capture and GIF generation
pub mod visualization;
