//! Pipeline error taxonomy
//!
//! Every stage failure is fatal: it aborts the current stage and every
//! stage downstream. There is no warning severity and no recovery; the
//! driver renders the message and halts.

use crate::scanner::scanner::ScanError;
use crate::semantics::usage::UsageError;
use crate::syntax::checker::SyntaxError;
use thiserror::Error;

/// Any error raised by the three-stage pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Grammar(#[from] SyntaxError),

    #[error(transparent)]
    Usage(#[from] UsageError),
}
