//! Input/output modules for command-line handling, configuration, and files

/// Command-line interface and batch file processing
pub mod cli;
/// Default values and tunable limits
pub mod configuration;
/// Error types for quiz generation and compositing operations
pub mod error;
/// Image loading, resizing, and saving
pub mod image;
/// Progress bar management for batch runs
pub mod progress;
/// Interactive prompts on standard error
pub mod prompt;
