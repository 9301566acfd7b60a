//! The fetch lifecycle shared by every keep-up view.
//!
//! A [`QueryWatch`] owns the current [`FetchState`] of one query and publishes every
//! phase transition over a [`tokio::sync::watch`] channel. Views subscribe and only
//! ever read the state.

use std::sync::Arc;

use tokio::sync::watch;
use tower::{Service, ServiceExt};

use crate::KeepUpClientError;

/// Lifecycle stage of one query
#[derive(Debug, Clone)]
pub enum FetchState<T> {
    /// The request is in flight
    Pending,
    /// The request failed; the error is shared with every observer
    Failed(Arc<KeepUpClientError>),
    /// The request resolved
    Succeeded(T),
}

impl<T> FetchState<T> {
    /// Whether the request is still in flight
    pub const fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// Whether the request has finished, successfully or not
    pub const fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// The resolved value, if any
    pub const fn succeeded(&self) -> Option<&T> {
        match self {
            FetchState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if any
    pub fn error(&self) -> Option<&KeepUpClientError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, KeepUpClientError>> for FetchState<T> {
    fn from(result: Result<T, KeepUpClientError>) -> Self {
        match result {
            Ok(value) => FetchState::Succeeded(value),
            Err(err) => FetchState::Failed(Arc::new(err)),
        }
    }
}

/// Drives one query and publishes its [`FetchState`].
///
/// The state starts as [`FetchState::Pending`]. Each call to [`QueryWatch::fetch`] moves
/// it back to `Pending` (unless it already is) and then to the terminal state the
/// service produced. Receivers observe the most recent state; intermediate states may be
/// skipped by slow observers. Dropping the watch closes every receiver.
#[derive(Debug)]
pub struct QueryWatch<T> {
    sender: watch::Sender<FetchState<T>>,
}

impl<T> Default for QueryWatch<T> {
    fn default() -> Self {
        QueryWatch::new()
    }
}

impl<T> QueryWatch<T> {
    /// Creates a watch in the [`FetchState::Pending`] state
    pub fn new() -> QueryWatch<T> {
        let (sender, _) = watch::channel(FetchState::Pending);
        QueryWatch { sender }
    }

    /// Hands out a receiver that sees the current state and every later transition
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.sender.subscribe()
    }

    /// A copy of the current state
    pub fn state(&self) -> FetchState<T>
    where
        T: Clone,
    {
        self.sender.borrow().clone()
    }

    /// Issues `request` through `service`, publishing `Pending` and then the outcome
    pub async fn fetch<S, R>(&self, service: &mut S, request: R)
    where
        S: Service<R, Response = T, Error = KeepUpClientError>,
    {
        if self.sender.borrow().is_terminal() {
            self.sender.send_replace(FetchState::Pending);
        }

        let result = match service.ready().await {
            Ok(service) => service.call(request).await,
            Err(err) => Err(err),
        };
        // the cause is reported once, by whoever renders the failed state
        tracing::debug!(succeeded = result.is_ok(), "query finished");

        self.sender.send_replace(FetchState::from(result));
    }
}
