use std::{convert::Infallible, time::Duration};

use http_body_util::BodyExt;
use keep_up_tower::ResponseFuture;
use tower::Service;

use crate::{HttpRequest, HttpResponse, HttpServiceConfig, HttpServiceError, DEFAULT_TIMEOUT};

/// Sends keep-up's HTTP requests through a [`reqwest::Client`].
///
/// The deadline covers the whole exchange, so a response whose body trickles in past it
/// still times out.
#[derive(Clone, Debug)]
pub struct ReqwestService {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestService {
    /// Creates a service with its own connection pool
    pub fn new(config: &HttpServiceConfig) -> Result<ReqwestService, HttpServiceError> {
        let timeout = (*config.timeout()).unwrap_or(DEFAULT_TIMEOUT);
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| HttpServiceError::Unexpected(err.into()))?;
        tracing::trace!(?timeout, "built reqwest client");
        Ok(ReqwestService { client, timeout })
    }
}

impl Service<HttpRequest> for ReqwestService {
    type Response = HttpResponse;
    type Error = HttpServiceError;
    type Future = ResponseFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        // reqwest queues requests on its own pool
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: HttpRequest) -> Self::Future {
        let client = self.client.clone();
        let timeout = self.timeout;
        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body
                .collect()
                .await
                .unwrap_or_else(|never: Infallible| match never {})
                .to_bytes();
            let req = reqwest::Request::try_from(http::Request::from_parts(parts, body))?;
            tracing::debug!(method = %req.method(), url = %req.url(), "sending request");
            let exchange = async move {
                let resp = http::Response::from(client.execute(req).await?);
                let (parts, body) = resp.into_parts();
                let body = body.collect().await?.to_bytes();
                Ok::<_, HttpServiceError>(HttpResponse::from_parts(parts, body))
            };
            let resp = tokio::time::timeout(timeout, exchange).await??;
            tracing::debug!(status = %resp.status(), "received response");
            Ok(resp)
        })
    }
}
