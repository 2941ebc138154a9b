//! Action types dispatched to reducers.
//!
//! An action is an immutable record requesting a state change. It carries a
//! kind drawn from a closed, application-wide registry, plus whatever
//! payload the transition needs. Actions are produced by external
//! collaborators (event handlers, effect callbacks) and are never mutated
//! after creation; reducers receive them by shared reference.

use std::fmt::Debug;
use std::hash::Hash;

/// An immutable, typed event record dispatched to request a state change.
///
/// The associated [`Kind`](Action::Kind) type is the action-identifier
/// registry: a closed set of identifiers the consuming application defines
/// once, typically as a `Copy` enum. Keying dispatch on an enum rather than
/// a runtime string gives exhaustiveness checking where callers want it,
/// while the transition table keeps the permissive unmatched-kind-is-a-no-op
/// contract.
///
/// Payload-free action sets can implement the trait for the kind enum
/// itself:
///
/// ```
/// use reducible_core::Action;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum ButtonAction {
///     Disabled,
///     Default,
/// }
///
/// impl Action for ButtonAction {
///     type Kind = Self;
///
///     fn kind(&self) -> Self::Kind {
///         *self
///     }
/// }
/// ```
///
/// Actions that carry payloads split the record from its identifier:
///
/// ```
/// use reducible_core::Action;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum CounterKind {
///     Add,
///     Reset,
/// }
///
/// #[derive(Debug, Clone)]
/// struct CounterAction {
///     kind: CounterKind,
///     amount: i64,
/// }
///
/// impl Action for CounterAction {
///     type Kind = CounterKind;
///
///     fn kind(&self) -> Self::Kind {
///         self.kind
///     }
/// }
/// ```
pub trait Action: Debug {
    /// Identifier type for the closed set of action kinds.
    type Kind: Copy + Eq + Hash + Debug;

    /// The kind of this action, used for transition-table lookup.
    fn kind(&self) -> Self::Kind;
}
