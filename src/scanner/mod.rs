//! Lexical analysis stage
//!
//! This module transforms raw source text into the flat token sequence
//! consumed by the two checkers:
//! - [`token`]: token categories, lexemes, and source positions
//! - [`scanner`]: the line-by-line matcher pipeline
//!
//! The scanner is the only stage that reads source text; everything
//! downstream operates on the `Vec<Token>` it produces.

pub mod scanner;
pub mod token;
