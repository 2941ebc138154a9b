//! # Button Example
//!
//! A button enabled-flag reducer demonstrating the reducible architecture.
//!
//! This example showcases:
//! - A fixed action-kind registry (the [`ButtonAction`] enum)
//! - A table-driven reducer with a configured default
//! - The identity transition for unregistered kinds
//! - Store usage from the runtime crate
//!
//! ## Architecture
//!
//! The state here is a single boolean: whether the button is enabled. The
//! default is `true`, and the two registered transitions ignore both the
//! previous state and any payload — they simply pin the flag. Actions no
//! transition is registered for leave the flag alone.
//!
//! ## Example
//!
//! ```
//! use button::{ButtonAction, button_reducer};
//! use reducible_core::Reducer;
//!
//! let reducer = button_reducer();
//! assert!(!reducer.reduce(Some(&true), &ButtonAction::Disabled));
//! assert!(reducer.reduce(None, &ButtonAction::Default));
//! ```

use reducible_core::{Action, TableReducer};

/// Button actions
///
/// The application-wide registry of action kinds the button state reacts
/// to. The variants are payload-free, so the enum doubles as its own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Disable the button
    Disabled,
    /// Restore the button to its default (enabled) appearance
    Default,
    /// The button was clicked
    ///
    /// Dispatched by the UI layer; the enabled flag has no transition
    /// registered for it, so it passes through as an identity transition.
    Clicked,
}

impl Action for ButtonAction {
    type Kind = Self;

    fn kind(&self) -> Self::Kind {
        *self
    }
}

/// Build the button enabled-flag reducer.
///
/// Default state is `true` (enabled). `Disabled` pins the flag to `false`,
/// `Default` pins it back to `true`; any other action is an identity
/// transition.
#[must_use]
pub fn button_reducer() -> TableReducer<bool, ButtonAction> {
    TableReducer::new(true)
        .on(ButtonAction::Disabled, |_, _| false)
        .on(ButtonAction::Default, |_, _| true)
}
