//! Lex command implementation.
//!
//! Scans one file (or standard input) and prints its tokens as text or
//! JSON.

use std::io::Write;
use std::path::PathBuf;

use arbc_lex::{Lexer, Token, TokenKind};
use arbc_util::{Position, SourceFile, SourceMap};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::commands::common::{load_source, render_lex_error, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{ArbtError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// File to scan, or `-` for standard input.
    pub input: PathBuf,
    /// Token output format.
    pub format: OutputFormat,
    /// Append source ranges to text output.
    pub show_spans: bool,
    /// Color rendered diagnostics.
    pub color: bool,
}

/// A token as written in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    value: Value,
    text: &'a str,
    start: PositionRecord,
    end: PositionRecord,
}

/// A position as written in JSON output. Lines and columns are 0-based.
#[derive(Debug, Serialize)]
struct PositionRecord {
    index: usize,
    line: u32,
    column: u32,
}

impl From<Position> for PositionRecord {
    fn from(pos: Position) -> Self {
        Self {
            index: pos.index,
            line: pos.line,
            column: pos.column,
        }
    }
}

impl<'a> TokenRecord<'a> {
    /// Builds the record for `token`, quoting its text from `file`.
    fn new(file: &'a SourceFile, token: &Token) -> Result<Self> {
        let value = match &token.kind {
            TokenKind::Int(v) => Value::from(*v),
            TokenKind::Boolean(b) => Value::from(*b),
            TokenKind::Identifier(name) => Value::from(name.as_str()),
            _ => Value::Null,
        };
        Ok(Self {
            kind: token.kind.name(),
            value,
            text: file.slice(token.span())?,
            start: token.start.into(),
            end: token.end.into(),
        })
    }
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs) -> Self {
        Self { args }
    }

    /// Execute the command against standard output and standard error.
    pub fn run(&self) -> Result<usize> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Execute the command, writing tokens to `out` and diagnostics to
    /// `err`. Returns the number of tokens printed.
    pub fn run_with(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<usize> {
        let mut map = SourceMap::new();
        let file = load_source(&mut map, &self.args.input)?;
        debug!(file = file.name(), format = self.args.format.name(), "lexing");

        let tokens = match Lexer::new(&file).scan() {
            Ok(tokens) => tokens,
            Err(lex_err) => {
                write!(err, "{}", render_lex_error(&lex_err, &file, self.args.color))?;
                return Err(ArbtError::LexFailed { failed: 1 });
            },
        };

        match self.args.format {
            OutputFormat::Text => self.write_text(out, &tokens)?,
            OutputFormat::Json => Self::write_json(out, &file, &tokens)?,
        }

        Ok(tokens.len())
    }

    fn write_text(&self, out: &mut dyn Write, tokens: &[Token]) -> Result<()> {
        for token in tokens {
            if self.args.show_spans {
                writeln!(
                    out,
                    "{} @ {}:{}-{}:{}",
                    token,
                    token.start.line + 1,
                    token.start.column + 1,
                    token.end.line + 1,
                    token.end.column + 1
                )?;
            } else {
                writeln!(out, "{}", token)?;
            }
        }
        Ok(())
    }

    fn write_json(out: &mut dyn Write, file: &SourceFile, tokens: &[Token]) -> Result<()> {
        let records = tokens
            .iter()
            .map(|token| TokenRecord::new(file, token))
            .collect::<Result<Vec<_>>>()?;
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl CommandDescription for LexCommand {
    fn description() -> &'static str {
        "Print the tokens of an Arroba source file"
    }

    fn help() -> &'static str {
        "Scans FILE (or standard input when FILE is `-`) and prints one token \
         per line, or a JSON array with --format json. Stops at the first \
         lexical error and prints it as a diagnostic."
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<usize> {
    debug!(command = <LexCommand as Command>::name(), "running");
    <LexCommand as Command>::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("prog.arb");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(input: PathBuf, format: OutputFormat) -> LexArgs {
        LexArgs {
            input,
            format,
            show_spans: false,
            color: false,
        }
    }

    fn run(args: LexArgs) -> (Result<usize>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = LexCommand::new(args).run_with(&mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_lex_text_output() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "@DEF@ f(x) @IS@ -2 @END@");

        let (result, out, err) = run(args(path, OutputFormat::Text));
        assert_eq!(result.unwrap(), 8);
        assert!(err.is_empty());
        assert_eq!(
            out,
            "DEF\nIDENTIFIER:f\nLPAREN\nIDENTIFIER:x\nRPAREN\nIS\nINT:-2\nEND\n"
        );
    }

    #[test]
    fn test_lex_text_output_with_spans() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "a # x\n  @+@");

        let mut lex_args = args(path, OutputFormat::Text);
        lex_args.show_spans = true;
        let (result, out, _) = run(lex_args);

        assert!(result.is_ok());
        assert_eq!(out, "IDENTIFIER:a @ 1:1-1:2\nPLUS @ 2:3-2:6\n");
    }

    #[test]
    fn test_lex_json_output() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "@TRUE@ 7 (");

        let (result, out, _) = run(args(path, OutputFormat::Json));
        assert_eq!(result.unwrap(), 3);

        let json: Value = serde_json::from_str(&out).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["kind"], "BOOLEAN");
        assert_eq!(records[0]["value"], true);
        assert_eq!(records[0]["text"], "@TRUE@");
        assert_eq!(records[1]["kind"], "INT");
        assert_eq!(records[1]["value"], 7);
        assert_eq!(records[1]["text"], "7");
        assert_eq!(records[1]["start"]["index"], 7);
        assert_eq!(records[2]["value"], Value::Null);
        assert_eq!(records[2]["end"]["column"], 10);
    }

    #[test]
    fn test_lex_error_prints_diagnostic() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "a @FOO@");

        let (result, out, err) = run(args(path, OutputFormat::Text));
        assert!(matches!(result, Err(ArbtError::LexFailed { failed: 1 })));
        assert!(out.is_empty());
        assert!(err.starts_with("error[E0001]: Illegal Character: Invalid token starting with '@'"));
        assert!(err.contains("prog.arb:1:3"));
        assert!(err.contains("= help:"));
    }

    #[test]
    fn test_lex_missing_file() {
        let (result, _, _) = run(args(PathBuf::from("/nonexistent/x.arb"), OutputFormat::Text));
        assert!(matches!(result, Err(ArbtError::Validation(_))));
    }

    #[test]
    fn test_lex_command_name() {
        assert_eq!(<LexCommand as Command>::name(), "lex");
        assert!(LexCommand::help().contains("--format json"));
    }
}
