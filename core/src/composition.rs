//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: replay every action against several reducers
//! - **`scope_reducer`**: focus a reducer on a subset of state
//!
//! Composition is how independently declared transition tables end up
//! behind a single store: each piece of state declares its own rules, and
//! the store dispatches through the combined reducer.

use crate::action::Action;
use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer runs in sequence and sees the state produced by its
/// predecessor; the final state is returned. Because unhandled actions are
/// identity transitions, every action can safely be replayed against every
/// reducer — the ones that do not care leave the state alone.
///
/// With no reducers and no current state, the combined reducer falls back
/// to `S::default()`.
///
/// # Examples
///
/// ```
/// use reducible_core::{Action, Reducer, TableReducer};
/// use reducible_core::composition::combine_reducers;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum AppAction {
///     Increment,
///     Double,
/// }
///
/// impl Action for AppAction {
///     type Kind = Self;
///
///     fn kind(&self) -> Self::Kind {
///         *self
///     }
/// }
///
/// let increment = TableReducer::new(0_i64).on(AppAction::Increment, |s, _| s + 1);
/// let double = TableReducer::new(0_i64).on(AppAction::Double, |s, _| s * 2);
///
/// let combined = combine_reducers(vec![Box::new(increment), Box::new(double)]);
///
/// assert_eq!(combined.reduce(Some(&3), &AppAction::Increment), 4);
/// assert_eq!(combined.reduce(Some(&3), &AppAction::Double), 6);
/// ```
#[must_use]
pub fn combine_reducers<S, A>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A>>>,
) -> CombinedReducer<S, A>
where
    S: Clone + Default + 'static,
    A: Action + 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: Clone + Default + 'static,
    A: Action + 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A>>>,
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: Clone + Default + 'static,
    A: Action + 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: Option<&S>, action: &A) -> S {
        let mut current: Option<S> = state.cloned();

        for reducer in &self.reducers {
            current = Some(reducer.reduce(current.as_ref(), action));
        }

        current.unwrap_or_default()
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows reducers written for a small state type to be reused inside
/// a larger application state. The lens is a pair of fn pointers: one to
/// read the slice, one to write the new slice back.
///
/// When the parent state is absent, the child reducer also sees an absent
/// state (and therefore substitutes its own default), and the remainder of
/// the parent starts from `S::default()`.
///
/// # Examples
///
/// ```
/// use reducible_core::{Action, Reducer, TableReducer};
/// use reducible_core::composition::scope_reducer;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum FormAction {
///     DisableSubmit,
/// }
///
/// impl Action for FormAction {
///     type Kind = Self;
///
///     fn kind(&self) -> Self::Kind {
///         *self
///     }
/// }
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct FormState {
///     submit_enabled: bool,
///     draft: String,
/// }
///
/// let submit = TableReducer::new(true).on(FormAction::DisableSubmit, |_, _| false);
///
/// let scoped = scope_reducer(
///     submit,
///     |form: &FormState| &form.submit_enabled,
///     |form: &mut FormState, enabled: bool| {
///         form.submit_enabled = enabled;
///     },
/// );
///
/// let state = FormState { submit_enabled: true, draft: "hello".into() };
/// let next = scoped.reduce(Some(&state), &FormAction::DisableSubmit);
/// assert!(!next.submit_enabled);
/// assert_eq!(next.draft, "hello");
/// ```
pub fn scope_reducer<S, SubS, A, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, R>
where
    S: Clone + Default + 'static,
    SubS: Clone + 'static,
    A: Action + 'static,
    R: Reducer<State = SubS, Action = A>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, R>
where
    S: Clone + Default + 'static,
    SubS: Clone + 'static,
    A: Action + 'static,
    R: Reducer<State = SubS, Action = A>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<A>,
}

impl<S, SubS, A, R> Reducer for ScopedReducer<S, SubS, A, R>
where
    S: Clone + Default + 'static,
    SubS: Clone + 'static,
    A: Action + 'static,
    R: Reducer<State = SubS, Action = A>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: Option<&S>, action: &A) -> S {
        // Run the child reducer on the slice, then write the result back
        // into a copy of the parent.
        let next_sub = self.reducer.reduce(state.map(self.get_state), action);

        let mut next = state.cloned().unwrap_or_default();
        (self.set_state)(&mut next, next_sub);
        next
    }
}
