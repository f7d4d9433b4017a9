//! avrkit provides two utilities for an AVR firmware workspace:
//! generation of the VS Code C/C++ IntelliSense configuration for the host
//! platform, and scaffolding of new projects from the workspace template.

/// Command-line interfaces of both utilities
pub mod cli;

/// Fixed file and directory names
pub mod constants;

/// Error types and handling
pub mod error;

/// Logger initialisation
pub mod logger;

/// Rewriting of `KEY = value` lines in a project Makefile
pub mod makefile;

/// Host platform detection
pub mod platform;

/// Generation of `.vscode/c_cpp_properties.json`
pub mod properties;

/// Copying the template into a new project
pub mod scaffold;

/// Paths derived from the workspace root
pub mod workspace;
