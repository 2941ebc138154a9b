//! # Reducible Runtime
//!
//! The Store runtime for table-driven reducers.
//!
//! The store is the one place canonical state lives. It dispatches actions
//! through a reducer, installs the returned state, and notifies
//! subscribers of changes. Reducers themselves stay pure and synchronous;
//! the store is where sharing and notification are managed.
//!
//! ## Example
//!
//! ```
//! use reducible_core::{Action, TableReducer};
//! use reducible_runtime::Store;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum ToggleAction {
//!     Disable,
//!     Enable,
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
//! # async fn example() {
//! let reducer = TableReducer::new(true)
//!     .on(ToggleAction::Disable, |_, _| false)
//!     .on(ToggleAction::Enable, |_, _| true);
//!
//! let store = Store::new(true, reducer);
//! let enabled = store.send(ToggleAction::Disable).await.unwrap();
//! assert!(!enabled);
//! assert!(!store.state(|s| *s).await);
//! # }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use reducible_core::Reducer;
use tokio::sync::{RwLock, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// The reducer contract itself raises no errors (unknown actions are
    /// identity transitions), so the only failures are store lifecycle
    /// ones.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is closed and no longer accepting actions
        ///
        /// Returned by `send()` after `close()` was called.
        #[error("Store is closed")]
        Closed,
    }
}

pub use error::StoreError;

/// The Store - owner of canonical state for a reducer.
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (the transition rules)
/// 3. Change notification (a `watch` channel carrying each new state)
///
/// Dispatch is serialized at the reducer: `send` holds the write lock while
/// the reducer runs, so each call sees the state left by the previous one.
/// The reducer never observes concurrent mutation.
///
/// Cloning a Store produces another handle to the same state and channel.
///
/// # Example
///
/// ```ignore
/// let store = Store::new(true, button_reducer());
/// store.send(ButtonAction::Disabled).await?;
/// let enabled = store.state(|s| *s).await;
/// ```
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    reducer: Arc<R>,
    closed: Arc<AtomicBool>,
    changes: watch::Sender<R::State>,
}

impl<R> Store<R>
where
    R: Reducer + Send + Sync + 'static,
    R::State: Clone + Send + Sync + 'static,
    R::Action: Send + 'static,
{
    /// Create a new store with an initial state and reducer.
    ///
    /// A [`TableReducer`](reducible_core::TableReducer)'s own default makes
    /// a natural initial state:
    ///
    /// ```ignore
    /// let reducer = button_reducer();
    /// let initial = reducer.default_state().clone();
    /// let store = Store::new(initial, reducer);
    /// ```
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        let (changes, _) = watch::channel(initial_state.clone());

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: Arc::new(reducer),
            closed: Arc::new(AtomicBool::new(false)),
            changes,
        }
    }

    /// Send an action to the store.
    ///
    /// Acquires the write lock, runs the reducer with the current state,
    /// installs the result, and notifies subscribers. Returns the new
    /// state.
    ///
    /// Unknown actions are a no-op by the reducer contract: the state is
    /// re-installed unchanged and subscribers are still notified (the
    /// `watch` channel deduplicates nothing; observers that care compare
    /// values).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Closed`] if the store has been closed.
    ///
    /// # Panics
    ///
    /// A panicking transition function propagates out of `send` unmodified;
    /// the store performs no recovery.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: R::Action) -> Result<R::State, StoreError> {
        if self.closed.load(Ordering::Acquire) {
            tracing::warn!("Rejected action: store is closed");
            return Err(StoreError::Closed);
        }

        tracing::debug!(kind = ?reducible_core::Action::kind(&action), "Processing action");

        let next = {
            let mut state = self.state.write().await;
            let next = self.reducer.reduce(Some(&*state), &action);
            *state = next.clone();
            next
        };

        // Subscribers may all have hung up; that is not an error.
        let _ = self.changes.send(next.clone());

        Ok(next)
    }

    /// Read current state via a closure.
    ///
    /// Access goes through a closure so the read lock is released promptly:
    ///
    /// ```ignore
    /// let enabled = store.state(|s| *s).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to state changes.
    ///
    /// Returns a `watch` receiver that holds the latest state. A receiver
    /// that falls behind only ever misses intermediate states, never the
    /// latest one.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut rx = store.subscribe();
    /// while rx.changed().await.is_ok() {
    ///     let state = rx.borrow().clone();
    ///     render(&state);
    /// }
    /// ```
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.changes.subscribe()
    }

    /// Close the store.
    ///
    /// Subsequent `send` calls return [`StoreError::Closed`]. State reads
    /// and existing subscriptions keep working; there are no in-flight
    /// effects to drain because reducers are pure.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        tracing::info!("Store closed");
    }

    /// Whether the store has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            closed: Arc::clone(&self.closed),
            changes: self.changes.clone(),
        }
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("closed", &self.closed.load(Ordering::Acquire))
            .field("subscribers", &self.changes.receiver_count())
            .finish_non_exhaustive()
    }
}
