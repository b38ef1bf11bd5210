//! Build errors for the NFA builder.

use thiserror::Error;

/// Errors that can occur when building an NFA.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,
}
