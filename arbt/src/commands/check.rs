//! Check command implementation.
//!
//! Scans several files and reports, per file, either the token count or the
//! lexical error.

use std::io::Write;
use std::path::PathBuf;

use arbc_lex::Lexer;
use arbc_util::SourceMap;
use tracing::{debug, warn};

use crate::commands::common::{error_messages, load_source, output_messages, render_lex_error};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::error::{ArbtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to scan.
    pub inputs: Vec<PathBuf>,
    /// Color rendered diagnostics.
    pub color: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Execute the command against standard output and standard error.
    pub fn run(&self) -> Result<CommandResult> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Execute the command, writing `ok` lines to `out` and diagnostics to
    /// `err`.
    ///
    /// Inputs share one [`SourceMap`], so each gets its own file id. Every
    /// input is checked even after a failure. Fails with
    /// [`ArbtError::LexFailed`] if any input could not be read or lexed.
    pub fn run_with(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<CommandResult> {
        if self.args.inputs.is_empty() {
            return Err(ArbtError::Validation(error_messages::NO_INPUT_FILES.to_string()));
        }

        let mut result = CommandResult::default();
        let mut map = SourceMap::new();

        for input in &self.args.inputs {
            let file = match load_source(&mut map, input) {
                Ok(file) => file,
                Err(read_err) => {
                    warn!(path = %input.display(), "could not read input");
                    writeln!(err, "error: {}", read_err)?;
                    result.failed();
                    continue;
                },
            };

            match Lexer::new(&file).scan() {
                Ok(tokens) => {
                    writeln!(
                        out,
                        "{} {} ({} tokens)",
                        output_messages::CHECK_OK,
                        file.name(),
                        tokens.len()
                    )?;
                    result.processed();
                },
                Err(lex_err) => {
                    write!(err, "{}", render_lex_error(&lex_err, &file, self.args.color))?;
                    result.failed();
                },
            }
        }

        debug!(
            loaded = map.file_count(),
            processed = result.items_processed,
            failed = result.items_failed,
            "check finished"
        );

        if result.success() {
            Ok(result)
        } else {
            Err(ArbtError::LexFailed {
                failed: result.items_failed,
            })
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Check that Arroba source files lex cleanly"
    }

    fn help() -> &'static str {
        "Scans every FILE and prints `ok FILE (N tokens)` or the diagnostic for \
         the first lexical error in it. Exits with status 1 if any file failed."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<CommandResult> {
    debug!(command = <CheckCommand as Command>::name(), "running");
    <CheckCommand as Command>::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(inputs: Vec<PathBuf>) -> (Result<CommandResult>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = CheckCommand::new(CheckArgs {
            inputs,
            color: false,
        })
        .run_with(&mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_check_all_ok() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.arb");
        let b = dir.path().join("b.arb");
        std::fs::write(&a, "@IF@ x @THEN@ 1 @END@").unwrap();
        std::fs::write(&b, "# empty\n").unwrap();

        let (result, out, err) = run(vec![a, b]);
        let result = result.unwrap();
        assert_eq!(result.items_processed, 2);
        assert!(err.is_empty());

        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("ok ") && lines[0].ends_with("a.arb (5 tokens)"));
        assert!(lines[1].ends_with("b.arb (0 tokens)"));
    }

    #[test]
    fn test_check_continues_after_failure() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.arb");
        let good = dir.path().join("good.arb");
        std::fs::write(&bad, "99999999999999999999").unwrap();
        std::fs::write(&good, "x").unwrap();

        let (result, out, err) = run(vec![bad, good]);
        assert!(matches!(result, Err(ArbtError::LexFailed { failed: 1 })));
        assert!(out.contains("good.arb (1 tokens)"));
        assert!(err.starts_with("error[E0002]: Integer Overflow:"));
    }

    #[test]
    fn test_check_reports_error_against_its_own_file() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.arb");
        let bad = dir.path().join("bad.arb");
        std::fs::write(&good, "a b c d").unwrap();
        std::fs::write(&bad, "# one\nx $").unwrap();

        let (result, _, err) = run(vec![good, bad]);
        assert!(matches!(result, Err(ArbtError::LexFailed { failed: 1 })));
        assert!(err.contains("bad.arb:2:3"));
        assert!(err.contains("  2 | x $\n"));
    }

    #[test]
    fn test_check_missing_file_counts_as_failure() {
        let (result, out, err) = run(vec![PathBuf::from("/nonexistent/a.arb")]);
        assert!(matches!(result, Err(ArbtError::LexFailed { failed: 1 })));
        assert!(out.is_empty());
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_check_requires_inputs() {
        let (result, _, _) = run(Vec::new());
        assert!(matches!(result, Err(ArbtError::Validation(_))));
    }

    #[test]
    fn test_check_command_name() {
        assert_eq!(<CheckCommand as Command>::name(), "check");
        assert!(!CheckCommand::description().is_empty());
    }
}
