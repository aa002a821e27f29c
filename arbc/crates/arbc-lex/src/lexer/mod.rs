//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier lexing
//! - `number` - Integer literal lexing, including `-`-prefixed literals
//! - `delimited` - `@...@` keyword and operator lexing
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod delimited;
mod identifier;
mod number;

pub use core::Lexer;
