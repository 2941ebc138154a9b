//! The Reducer trait - pure state transitions.
//!
//! A reducer maps `(current state, action)` to the next state. It holds no
//! mutable data of its own; the canonical state lives in the caller (a
//! store), and each call is a pure function of its two inputs.

use crate::action::Action;

/// A pure function mapping (current state, action) to the next state.
///
/// # Contract
///
/// - **Deterministic**: the same `(state, action)` pair always produces the
///   same result.
/// - **Side-effect-free**: no I/O, no mutation of the inputs. A new state
///   value is returned rather than mutating in place.
/// - **Absent state**: `state == None` means the caller holds no state yet;
///   implementations substitute their configured default.
/// - **Permissive miss**: an action the reducer does not handle returns the
///   current state unchanged. Unknown actions are a no-op by contract, not
///   a failure, so a store can replay every action against every reducer.
///
/// A transition that panics propagates to the caller unmodified; the
/// reducer performs no recovery, wrapping, or logging.
///
/// # Example
///
/// ```
/// use reducible_core::{Action, Reducer};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// impl Action for CounterAction {
///     type Kind = Self;
///
///     fn kind(&self) -> Self::Kind {
///         *self
///     }
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = i64;
///     type Action = CounterAction;
///
///     fn reduce(&self, state: Option<&i64>, action: &CounterAction) -> i64 {
///         let current = state.copied().unwrap_or(0);
///         match action {
///             CounterAction::Increment => current + 1,
///             CounterAction::Decrement => current - 1,
///         }
///     }
/// }
///
/// let reducer = CounterReducer;
/// assert_eq!(reducer.reduce(None, &CounterAction::Increment), 1);
/// assert_eq!(reducer.reduce(Some(&5), &CounterAction::Decrement), 4);
/// ```
pub trait Reducer {
    /// The state type this reducer operates on.
    ///
    /// `Clone` is required so the identity transition can hand back the
    /// current state by value without touching the caller's copy.
    type State: Clone;

    /// The action type this reducer processes.
    type Action: Action;

    /// Compute the next state for an action.
    ///
    /// # Arguments
    ///
    /// - `state`: the current state, or `None` when the caller holds no
    ///   state yet
    /// - `action`: the action to process
    ///
    /// # Returns
    ///
    /// The next state. For an unhandled action this is the current state
    /// unchanged (or the default when `state` is `None`).
    fn reduce(&self, state: Option<&Self::State>, action: &Self::Action) -> Self::State;
}

impl<R: Reducer + ?Sized> Reducer for Box<R> {
    type State = R::State;
    type Action = R::Action;

    fn reduce(&self, state: Option<&Self::State>, action: &Self::Action) -> Self::State {
        (**self).reduce(state, action)
    }
}
