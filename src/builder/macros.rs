//! Macros for ergonomic NFA construction.

/// Build an [`Nfa`](crate::core::Nfa) from a declarative description.
///
/// Each transition line reads `from => symbol => [targets]`. Epsilon moves
/// are written with whatever value the conversion will treat as the epsilon
/// marker.
///
/// # Example
///
/// ```
/// use powerset::nfa;
///
/// let nfa = nfa! {
///     start: 0u32,
///     accept: [3],
///     alphabet: ['a', 'b'],
///     transitions: {
///         0 => 'ε' => [1, 2],
///         1 => 'a' => [1, 2],
///         2 => 'b' => [3],
///     }
/// };
///
/// assert_eq!(nfa.states().len(), 4);
/// ```
#[macro_export]
macro_rules! nfa {
    (
        start: $start:expr,
        $(states: [$($state:expr),* $(,)?],)?
        $(accept: [$($accept:expr),* $(,)?],)?
        alphabet: [$($symbol:expr),* $(,)?]
        $(, transitions: {
            $($from:expr => $on:expr => [$($to:expr),* $(,)?]),* $(,)?
        })?
        $(,)?
    ) => {{
        let builder = $crate::builder::NfaBuilder::new().start($start);
        $($(let builder = builder.state($state);)*)?
        $($(let builder = builder.accept($accept);)*)?
        $(let builder = builder.symbol($symbol);)*
        $($(let builder = builder.transitions($from, $on, [$($to),*]);)*)?
        builder
            .build()
            .expect("nfa! always sets a start state")
    }};
}
