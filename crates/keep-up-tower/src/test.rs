//! Test doubles for code that talks to a [`tower::Service`]
//!
//! [`mock_service!`] declares a `mockall` mock of [`Respond`]; wrapping it in a [`Responder`]
//! turns it into a cheaply cloneable service that is always ready, so it can stand in for
//! the inner service of any keep-up middleware.

use std::{
    sync::{Arc, Mutex, PoisonError},
    task::{Context, Poll},
};

use futures::future::{ready, Ready};
use tower::Service;

pub use mockall as mockall_;

/// Answers one request synchronously; what a [`Responder`] delegates to
pub trait Respond<Request> {
    /// Successful answer
    type Response;
    /// Failed answer
    type Error;

    /// Produces the answer to `request`
    fn respond(&self, request: Request) -> Result<Self::Response, Self::Error>;
}

/// Declares `Mock$name`, a `mockall` mock implementing [`Respond`] for `$request`.
///
/// Set answers with `expect_respond()` and hand the mock to [`Responder::new`].
#[macro_export]
macro_rules! mock_service {
    ($name:ident, $($request:ident)::+ $(< $($request_arg:ty),+ >)?, $response:ty, $error:ty) => {
        $crate::test::mockall_::mock! {
            pub $name {}

            impl keep_up_tower::test::Respond<$($request)::+ $(< $($request_arg),+ >)?> for $name {
                type Response = $response;
                type Error = $error;

                fn respond(&self, request: $($request)::+ $(< $($request_arg),+ >)?) -> Result<$response, $error>;
            }
        }
    };
}

pub use mock_service;

/// A [`Service`] that is always ready and answers through a shared [`Respond`] implementation
pub struct Responder<R> {
    respond: Arc<Mutex<R>>,
}

impl<R> Responder<R> {
    /// Shares `respond` between this service and all of its clones
    pub fn new(respond: R) -> Responder<R> {
        Responder {
            respond: Arc::new(Mutex::new(respond)),
        }
    }
}

impl<R> Clone for Responder<R> {
    fn clone(&self) -> Self {
        Responder {
            respond: Arc::clone(&self.respond),
        }
    }
}

impl<R, Request> Service<Request> for Responder<R>
where
    R: Respond<Request>,
{
    type Response = R::Response;
    type Error = R::Error;
    type Future = Ready<Result<R::Response, R::Error>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let respond = self.respond.lock().unwrap_or_else(PoisonError::into_inner);
        ready(respond.respond(request))
    }
}

#[cfg(test)]
mod tests {
    use tower::ServiceExt;

    use super::Responder;

    mock_service!(Doubler, u32, u32, String);

    #[tokio::test]
    async fn clones_share_expectations() {
        let mut mock = MockDoubler::new();
        mock.expect_respond().times(2).returning(|n| {
            if n > 10 {
                Err(format!("{n} is too big"))
            } else {
                Ok(n * 2)
            }
        });
        let service = Responder::new(mock);

        assert_eq!(service.clone().oneshot(4).await, Ok(8));
        assert_eq!(service.oneshot(11).await, Err("11 is too big".to_string()));
    }
}
