//! Stamps the operator's `--header` values onto every request

use http::HeaderMap;
use tower::{Layer, Service};

/// Wraps a service in [`ExtendHeaders`]
#[derive(Clone, Debug)]
pub struct ExtendHeadersLayer {
    headers: HeaderMap,
}

impl ExtendHeadersLayer {
    /// Adds `headers` to everything sent through the wrapped service
    pub fn new(headers: impl Into<HeaderMap>) -> ExtendHeadersLayer {
        ExtendHeadersLayer {
            headers: headers.into(),
        }
    }
}

impl<S> Layer<S> for ExtendHeadersLayer {
    type Service = ExtendHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ExtendHeaders {
            headers: self.headers.clone(),
            inner,
        }
    }
}

/// Overwrites same-named request headers with its own before calling `inner`
#[derive(Clone, Debug)]
pub struct ExtendHeaders<S> {
    headers: HeaderMap,
    inner: S,
}

impl<B, S> Service<http::Request<B>> for ExtendHeaders<S>
where
    S: Service<http::Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<B>) -> Self::Future {
        req.headers_mut().extend(self.headers.clone());
        self.inner.call(req)
    }
}
