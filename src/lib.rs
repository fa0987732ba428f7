//! # Introduction
//!
//! porcheck validates programs written in a small Portuguese-keyword
//! pseudocode dialect: declarations, assignment, a conditional, a bounded
//! loop, read/write commands, and arithmetic/logical expressions. It is a
//! validator, not a compiler backend — nothing is generated or executed.
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → Scanner → Tokens → SyntaxChecker → UsageChecker
//! ```
//!
//! 1. [`scanner`] — tokenises the source line by line with an ordered
//!    matcher list.
//! 2. [`syntax`] — a recursive-descent acceptor that verifies the token
//!    sequence against the language grammar (no AST is built).
//! 3. [`semantics`] — a forward pass enforcing declare-before-use and
//!    assign-before-read on identifiers.
//!
//! The stages run strictly left to right over the same immutable token
//! sequence; each checker keeps its own cursor, and the first error of
//! any stage aborts the rest of the pipeline.

pub mod error;
pub mod scanner;
pub mod semantics;
pub mod syntax;

use error::AnalysisError;
use scanner::scanner::Scanner;
use scanner::token::Token;
use semantics::usage::UsageChecker;
use syntax::checker::SyntaxChecker;

/// Run the full pipeline on a source string: scan, grammar-check, then
/// usage-check, stopping at the first error.
///
/// Holds no state between calls; re-running on unchanged input yields an
/// identical verdict and identical diagnostic text.
pub fn validate_source(source: &str) -> Result<Vec<Token>, AnalysisError> {
    let tokens = Scanner::new(source).tokenize()?;
    SyntaxChecker::new(&tokens).parse()?;
    UsageChecker::new(&tokens).validate()?;
    Ok(tokens)
}
