//! Common types and utilities for arbt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use arbc_lex::LexError;
use arbc_util::{SourceFile, SourceMap};

use crate::error::{ArbtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line
    Text,
    /// A JSON array of token records
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Canonical name, as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Display name used for standard input in diagnostics.
pub const STDIN_NAME: &str = "<stdin>";

/// Read a source file, or standard input when `path` is `-`, and register
/// it in `map`. Each loaded file gets the next [`arbc_util::FileId`].
pub fn load_source(map: &mut SourceMap, path: &Path) -> Result<Arc<SourceFile>> {
    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        let id = map.add_file(STDIN_NAME, content);
        return Ok(map.get_file(id)?);
    }

    if !path.exists() {
        return Err(ArbtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ArbtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let id = map.add_file(path.display().to_string(), content);
    Ok(map.get_file(id)?)
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Render a lexer error against the file it came from.
pub fn render_lex_error(err: &LexError, file: &SourceFile, color: bool) -> String {
    let diagnostic = err.to_diagnostic(file);
    if color {
        diagnostic.render_colored(file)
    } else {
        diagnostic.render(file)
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when a configuration file would be overwritten.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force to overwrite):";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message prefixes.
pub mod output_messages {
    /// Created directory message.
    pub const CREATED_DIR: &str = "✅ Created directory:";

    /// Created file message.
    pub const CREATED_FILE: &str = "✅ Created file:";

    /// Prefix of a successful check line.
    pub const CHECK_OK: &str = "ok";
}
