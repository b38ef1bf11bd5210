//! Configuration for a single subset construction.

use super::error::ConstructionError;
use crate::core::Symbol;
use serde::{Deserialize, Serialize};

/// Epsilon marker used by [`ConstructionConfig::default`] for `char` alphabets.
pub const DEFAULT_EPSILON: char = 'ε';

/// How symbols without a transition are represented in the DFA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadStatePolicy {
    /// Leave the transition out; a missing entry is an implicit dead end.
    #[default]
    Implicit,

    /// Add one non-accepting sink state (with an empty NFA state set) and
    /// route every missing transition to it, making the transition
    /// function total.
    Explicit,
}

/// Options passed to every construction call.
///
/// # Example
///
/// ```rust
/// use powerset::construction::{ConstructionConfig, DeadStatePolicy};
///
/// let config = ConstructionConfig::new('$')
///     .with_dead_state(DeadStatePolicy::Explicit)
///     .with_max_states(1024);
///
/// assert_eq!(config.epsilon_symbol, '$');
/// assert_eq!(config.max_states, Some(1024));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "A: Symbol")]
pub struct ConstructionConfig<A: Symbol> {
    /// The symbol that means "no input consumed". Must not be in the alphabet.
    pub epsilon_symbol: A,

    /// Representation of missing transitions
    #[serde(default)]
    pub dead_state: DeadStatePolicy,

    /// Upper bound on the number of DFA states, `None` for unbounded
    #[serde(default)]
    pub max_states: Option<usize>,
}

impl<A: Symbol> ConstructionConfig<A> {
    /// Create a config with the given epsilon marker and default options.
    pub fn new(epsilon_symbol: A) -> Self {
        Self {
            epsilon_symbol,
            dead_state: DeadStatePolicy::default(),
            max_states: None,
        }
    }

    pub fn with_dead_state(mut self, policy: DeadStatePolicy) -> Self {
        self.dead_state = policy;
        self
    }

    pub fn with_max_states(mut self, limit: usize) -> Self {
        self.max_states = Some(limit);
        self
    }

    /// Load a config from JSON.
    ///
    /// Only `epsilon_symbol` is required; the other fields fall back to
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConstructionError> {
        serde_json::from_str(json).map_err(|e| ConstructionError::InvalidConfig(e.to_string()))
    }
}

impl Default for ConstructionConfig<char> {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}
