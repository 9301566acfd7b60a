//! Small [`tower`] helpers shared by the keep-up service crates

use std::pin::Pin;

use futures::Future;
use tower::Service;

#[cfg(test)]
extern crate self as keep_up_tower;

#[cfg(any(test, feature = "test"))]
pub mod test;

/// Boxed, sendable future returned by the keep-up middleware services
pub type ResponseFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Takes the service that was driven to readiness out of `src`, leaving a fresh clone behind.
///
/// A clone of a ready service is not necessarily ready itself, so the original has to be
/// the one that handles the request.
/// See <https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services>
pub fn replace_ready_service<S, T>(src: &mut S) -> S
where
    S: Service<T> + Clone,
{
    let clone = src.clone();
    std::mem::replace(src, clone)
}
