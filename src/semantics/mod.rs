//! Semantic analysis stage
//!
//! The only semantic discipline in the language is variable usage:
//! declare before use, assign before read, never declare twice. The
//! check is a flat, flow-insensitive pass over the token sequence.

pub mod usage;
