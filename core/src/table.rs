//! The table-driven reducer factory.
//!
//! A [`TableReducer`] is built once from a default state and a set of
//! per-kind transition functions, then called many times. This is the
//! dispatch-table pattern: each piece of state declares its own transition
//! rules independently, and an external store composes the resulting
//! reducers and replays every action against each of them.

use std::collections::HashMap;
use std::fmt;

use crate::action::Action;
use crate::reducer::Reducer;

/// A registered transition: `(current state, action) → next state`.
///
/// Transitions receive the whole action, so they can read the payload as
/// well as the previous state. Many transitions ignore both and return a
/// constant; the contract allows either.
type Transition<S, A> = Box<dyn Fn(&S, &A) -> S + Send + Sync>;

/// A reducer backed by a kind-keyed transition table.
///
/// Closes over a default state and a mapping from action kind to transition
/// function, both fixed at construction time. The reducer itself is
/// stateless: all state lives in the caller.
///
/// # Dispatch semantics
///
/// - An absent current state is substituted with the default before lookup.
/// - A kind with a registered transition invokes it with
///   `(current state, action)` and returns its result.
/// - A kind with no registered transition returns the current state
///   unchanged. This permissive-miss policy is deliberate: it lets a store
///   replay every action against every reducer without coordination.
/// - A transition that panics propagates to the caller unmodified.
///
/// # Example
///
/// ```
/// use reducible_core::{Action, Reducer, TableReducer};
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
///
/// let reducer = TableReducer::new(true)
///     .on(ButtonAction::Disabled, |_, _| false)
///     .on(ButtonAction::Default, |_, _| true);
///
/// assert!(!reducer.reduce(Some(&true), &ButtonAction::Disabled));
/// assert!(reducer.reduce(None, &ButtonAction::Default));
/// ```
pub struct TableReducer<S, A: Action> {
    default: S,
    transitions: HashMap<A::Kind, Transition<S, A>>,
}

impl<S, A: Action> TableReducer<S, A> {
    /// Create a reducer with the given default state and an empty table.
    ///
    /// With no transitions registered, every action is an identity
    /// transition.
    #[must_use]
    pub fn new(default: S) -> Self {
        Self {
            default,
            transitions: HashMap::new(),
        }
    }

    /// Register the transition for an action kind.
    ///
    /// Consumes and returns the reducer so tables read as a single
    /// expression. Registering the same kind twice replaces the earlier
    /// transition (last write wins).
    #[must_use]
    pub fn on<F>(mut self, kind: A::Kind, transition: F) -> Self
    where
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        self.transitions.insert(kind, Box::new(transition));
        self
    }

    /// The state substituted when the reducer is called without one.
    #[must_use]
    pub const fn default_state(&self) -> &S {
        &self.default
    }

    /// Whether a transition is registered for the given kind.
    #[must_use]
    pub fn handles(&self, kind: A::Kind) -> bool {
        self.transitions.contains_key(&kind)
    }

    /// Number of registered transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether the table has no registered transitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S, A> Reducer for TableReducer<S, A>
where
    S: Clone,
    A: Action,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: Option<&S>, action: &A) -> S {
        let current = state.unwrap_or(&self.default);

        match self.transitions.get(&action.kind()) {
            Some(transition) => transition(current, action),
            None => current.clone(),
        }
    }
}

// Manual Debug implementation since transition functions are opaque
impl<S, A> fmt::Debug for TableReducer<S, A>
where
    S: fmt::Debug,
    A: Action,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&A::Kind> = self.transitions.keys().collect();
        kinds.sort_by_key(|kind| format!("{kind:?}"));

        f.debug_struct("TableReducer")
            .field("default", &self.default)
            .field("kinds", &kinds)
            .finish()
    }
}
