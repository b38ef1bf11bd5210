//! Builder API for ergonomic NFA construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! describing NFAs with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod nfa;

pub use error::BuildError;
pub use nfa::NfaBuilder;
