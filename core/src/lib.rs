//! # Reducible Core
//!
//! Core traits and types for table-driven reducers.
//!
//! This crate provides the abstractions for expressing UI-style state
//! transitions as pure functions: an action is dispatched, a reducer maps
//! `(current state, action)` to the next state, and an external store owns
//! the canonical state between calls.
//!
//! ## Core Concepts
//!
//! - **Action**: an immutable record requesting a state change, identified
//!   by a kind drawn from a closed, application-wide registry
//! - **Reducer**: pure function `(Option<State>, Action) → State`
//! - **Transition table**: a mapping from action kind to the pure function
//!   implementing that specific transition, built once and immutable after
//! - **Store** (in `reducible-runtime`): owns the canonical state and
//!   replays every dispatched action through the reducer
//!
//! ## Design Principles
//!
//! - Reducers are deterministic and side-effect-free
//! - State is passed in and a new value is returned; inputs are never
//!   mutated in place
//! - An action kind with no registered transition is an identity
//!   transition, never an error
//! - An absent current state is substituted with the configured default
//!
//! ## Example
//!
//! ```
//! use reducible_core::{Action, Reducer, TableReducer};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum ToggleAction {
//!     Enable,
//!     Disable,
//! }
//!
//! impl Action for ToggleAction {
//!     type Kind = Self;
//!
//!     fn kind(&self) -> Self::Kind {
//!         *self
//!     }
//! }
//!
//! let reducer = TableReducer::new(true)
//!     .on(ToggleAction::Disable, |_, _| false)
//!     .on(ToggleAction::Enable, |_, _| true);
//!
//! assert!(!reducer.reduce(Some(&true), &ToggleAction::Disable));
//! assert!(reducer.reduce(None, &ToggleAction::Enable));
//! ```

/// Action types dispatched to reducers
pub mod action;

/// Reducer composition utilities
pub mod composition;

/// The Reducer trait - pure state transitions
pub mod reducer;

/// The table-driven reducer factory
pub mod table;

pub use action::Action;
pub use composition::{combine_reducers, scope_reducer};
pub use reducer::Reducer;
pub use table::TableReducer;
