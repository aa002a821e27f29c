//! Command trait and common types for the arbt CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to ensure consistency across the application.

#![allow(dead_code)]

use crate::error::Result;

/// Standard command trait that all arbt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions and help text.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;

    /// Get detailed help text for the command.
    fn help() -> &'static str;
}

/// Outcome of a command that processes several inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Number of inputs processed successfully.
    pub items_processed: usize,

    /// Number of inputs that failed.
    pub items_failed: usize,
}

impl CommandResult {
    /// Record one successful input.
    pub fn processed(&mut self) {
        self.items_processed += 1;
    }

    /// Record one failed input.
    pub fn failed(&mut self) {
        self.items_failed += 1;
    }

    /// Whether every input succeeded.
    pub fn success(&self) -> bool {
        self.items_failed == 0
    }
}
