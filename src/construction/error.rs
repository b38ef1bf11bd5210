//! Construction error types.

use thiserror::Error;

/// Errors that can occur before or during a subset construction.
///
/// No partial DFA is ever returned alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    /// The epsilon marker was declared as an input symbol
    #[error("Epsilon marker {symbol} appears in the alphabet")]
    InvalidAlphabet { symbol: String },

    /// The construction discovered more DFA states than allowed
    #[error("DFA state limit of {limit} exceeded")]
    StateLimitExceeded { limit: usize },

    /// Configuration could not be loaded
    #[error("Invalid construction config: {0}")]
    InvalidConfig(String),
}
