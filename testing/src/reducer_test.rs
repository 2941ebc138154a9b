//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable
//! Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use reducible_core::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Omitting `given_state` exercises the absent-state path, where the
/// reducer substitutes its configured default.
///
/// # Example
///
/// ```ignore
/// ReducerTest::new(button_reducer())
///     .given_state(true)
///     .when_action(ButtonAction::Disabled)
///     .then_state(|state| {
///         assert!(!state);
///     })
///     .run();
/// ```
pub struct ReducerTest<R: Reducer> {
    reducer: R,
    initial_state: Option<R::State>,
    action: Option<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
}

impl<R: Reducer> ReducerTest<R> {
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    ///
    /// Optional: leaving it unset dispatches against an absent state.
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test, execute all assertions, and return the produced state
    ///
    /// # Panics
    ///
    /// Panics if the action is not set, or if any assertion fails.
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) -> R::State {
        let action = self.action.expect("Action must be set with when_action()");

        let next = self.reducer.reduce(self.initial_state.as_ref(), &action);

        for assertion in self.state_assertions {
            assertion(&next);
        }

        next
    }
}

/// Helper assertions for the reducer contract
pub mod assertions {
    use reducible_core::Reducer;

    /// Assert that an action is an identity transition for a given state.
    ///
    /// This is the unmatched-kind contract: the reducer must hand the
    /// current state back unchanged for actions it does not handle.
    ///
    /// # Panics
    ///
    /// Panics if the reducer changes the state.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_identity<R>(reducer: &R, state: &R::State, action: &R::Action)
    where
        R: Reducer,
        R::State: PartialEq + std::fmt::Debug,
    {
        let next = reducer.reduce(Some(state), action);
        assert_eq!(
            &next, state,
            "Expected identity transition for {action:?}, but state changed"
        );
    }

    /// Assert that an absent state reduces to the expected default.
    ///
    /// Pass an action the reducer does not handle: the result must be the
    /// configured default, untouched.
    ///
    /// # Panics
    ///
    /// Panics if the result differs from the expected default.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_default<R>(reducer: &R, action: &R::Action, expected: &R::State)
    where
        R: Reducer,
        R::State: PartialEq + std::fmt::Debug,
    {
        let next = reducer.reduce(None, action);
        assert_eq!(
            &next, expected,
            "Expected absent state to reduce to the default for {action:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reducible_core::{Action, TableReducer};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Increment,
        Decrement,
        Noop,
    }

    impl Action for TestAction {
        type Kind = Self;

        fn kind(&self) -> Self::Kind {
            *self
        }
    }

    fn counter() -> TableReducer<i64, TestAction> {
        TableReducer::new(0)
            .on(TestAction::Increment, |s, _| s + 1)
            .on(TestAction::Decrement, |s, _| s - 1)
    }

    #[test]
    fn given_when_then_increment() {
        ReducerTest::new(counter())
            .given_state(0)
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(*state, 1);
            })
            .run();
    }

    #[test]
    fn run_returns_the_produced_state() {
        let next = ReducerTest::new(counter())
            .given_state(5)
            .when_action(TestAction::Decrement)
            .run();
        assert_eq!(next, 4);
    }

    #[test]
    fn omitted_given_state_uses_the_default() {
        let next = ReducerTest::new(counter())
            .when_action(TestAction::Increment)
            .run();
        assert_eq!(next, 1);
    }

    #[test]
    fn identity_assertion_for_unhandled_action() {
        assertions::assert_identity(&counter(), &42, &TestAction::Noop);
    }

    #[test]
    fn default_assertion_for_absent_state() {
        assertions::assert_default(&counter(), &TestAction::Noop, &0);
    }

    #[test]
    #[should_panic(expected = "Expected identity transition")]
    fn identity_assertion_catches_state_changes() {
        assertions::assert_identity(&counter(), &42, &TestAction::Increment);
    }
}
