//! Syntax analysis stage
//!
//! A recursive-descent acceptor over the scanner's token sequence. There
//! is no AST: acceptance is "parse() did not fail", and the first
//! mismatch aborts the stage with a diagnostic pointing at the offending
//! token.

pub mod checker;
