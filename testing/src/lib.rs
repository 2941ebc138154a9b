//! # Reducible Testing
//!
//! Testing utilities and helpers for table-driven reducers.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for reducer tests
//! - Assertion helpers for the reducer contract (identity fallback,
//!   default substitution)
//!
//! ## Example
//!
//! ```
//! use reducible_core::{Action, TableReducer};
//! use reducible_testing::ReducerTest;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum ButtonAction {
//!     Disabled,
//!     Default,
//! }
//!
//! impl Action for ButtonAction {
//!     type Kind = Self;
//!
//!     fn kind(&self) -> Self::Kind {
//!         *self
//!     }
//! }
//!
//! let reducer = TableReducer::new(true)
//!     .on(ButtonAction::Disabled, |_, _| false)
//!     .on(ButtonAction::Default, |_, _| true);
//!
//! ReducerTest::new(reducer)
//!     .given_state(true)
//!     .when_action(ButtonAction::Disabled)
//!     .then_state(|state| {
//!         assert!(!state);
//!     })
//!     .run();
//! ```

/// Fluent Given-When-Then harness for reducers
pub mod reducer_test;

pub use reducer_test::ReducerTest;
pub use reducer_test::assertions;
