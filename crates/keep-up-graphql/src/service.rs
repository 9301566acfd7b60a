use std::fmt;

use bytes::Bytes;
use graphql_client::GraphQLQuery;
use http::{header::CONTENT_TYPE, HeaderValue};
use http_body_util::Full;
use keep_up_http::{HttpRequest, HttpResponse};
use keep_up_tower::{replace_ready_service, ResponseFuture};
use tower::{Layer, Service};
use url::Url;

use crate::{GraphQLRequest, GraphQLResponse, GraphQLServiceError};

const JSON: &str = "application/json";

/// Turns an HTTP service into a [`GraphQLService`] bound to `endpoint`
#[derive(Clone, Debug)]
pub struct GraphQLLayer {
    endpoint: Url,
}

impl GraphQLLayer {
    /// Queries will be POSTed to `endpoint`
    pub const fn new(endpoint: Url) -> GraphQLLayer {
        GraphQLLayer { endpoint }
    }
}

impl<S> Layer<S> for GraphQLLayer {
    type Service = GraphQLService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GraphQLService::new(self.endpoint.clone(), inner)
    }
}

/// POSTs each [`GraphQLRequest`] as JSON and decodes the `data` it gets back
#[derive(Clone, Debug)]
pub struct GraphQLService<S> {
    endpoint: Url,
    inner: S,
}

impl<S> GraphQLService<S> {
    /// Sends queries for `endpoint` through `inner`
    pub const fn new(endpoint: Url, inner: S) -> GraphQLService<S> {
        GraphQLService { endpoint, inner }
    }
}

fn encode<Q: GraphQLQuery>(
    endpoint: &Url,
    request: GraphQLRequest<Q>,
) -> Result<HttpRequest, GraphQLServiceError<Q::ResponseData>>
where
    Q::ResponseData: fmt::Debug,
{
    let body = request.into_body();
    tracing::debug!(operation = body.operation_name, %endpoint, "sending GraphQL request");
    let json = serde_json::to_vec(&body).map_err(|err| GraphQLServiceError::Request(err.into()))?;
    http::Request::post(endpoint.as_str())
        .header(CONTENT_TYPE, HeaderValue::from_static(JSON))
        .body(Full::new(Bytes::from(json)))
        .map_err(|err| GraphQLServiceError::Request(err.into()))
}

fn decode<Q: GraphQLQuery>(
    resp: HttpResponse,
) -> Result<Q::ResponseData, GraphQLServiceError<Q::ResponseData>>
where
    Q::ResponseData: fmt::Debug,
{
    let (parts, body) = resp.into_parts();
    match serde_json::from_slice::<GraphQLResponse<Q::ResponseData>>(&body) {
        Ok(response) => GraphQLServiceError::check(response),
        Err(source) => Err(GraphQLServiceError::Undecodable {
            source,
            body,
            status: parts.status,
        }),
    }
}

impl<Q, S> Service<GraphQLRequest<Q>> for GraphQLService<S>
where
    Q: GraphQLQuery + 'static,
    Q::ResponseData: Send + fmt::Debug + 'static,
    S: Service<HttpRequest, Response = HttpResponse> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Response = Q::ResponseData;
    type Error = GraphQLServiceError<Q::ResponseData>;
    type Future = ResponseFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner
            .poll_ready(cx)
            .map_err(|err| GraphQLServiceError::UpstreamService(err.into()))
    }

    fn call(&mut self, req: GraphQLRequest<Q>) -> Self::Future {
        let mut inner = replace_ready_service::<_, HttpRequest>(&mut self.inner);
        let req = encode(&self.endpoint, req);
        Box::pin(async move {
            let resp = inner
                .call(req?)
                .await
                .map_err(|err| GraphQLServiceError::UpstreamService(err.into()))?;
            decode::<Q>(resp)
        })
    }
}
