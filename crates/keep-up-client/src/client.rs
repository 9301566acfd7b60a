use std::time::Duration;

use buildstructor::buildstructor;
use http::HeaderMap;
use keep_up_graphql::{GraphQLLayer, GraphQLService};
use keep_up_http::{
    extend_headers::ExtendHeadersLayer, retry::RetryPolicy, HttpService, HttpServiceConfig,
    ReqwestService,
};
use tower::{ServiceBuilder, ServiceExt};
use url::Url;

use crate::{
    operations::{tasks::ViewerTasksFetch, viewer::ViewerFetch},
    KeepUpClientError,
};

/// Retries allowed after the first attempt when none are configured
pub const DEFAULT_RETRIES: usize = 3;

/// The GraphQL service every keep-up operation runs on
pub type GraphQLStack = GraphQLService<HttpService>;

/// Everything needed to talk to a keep-up GraphQL endpoint
#[derive(Clone, Debug)]
pub struct ClientConfig {
    endpoint: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    retries: usize,
}

#[buildstructor]
impl ClientConfig {
    #[builder]
    pub fn new(
        endpoint: Url,
        headers: Option<HeaderMap>,
        timeout: Option<Duration>,
        retries: Option<usize>,
    ) -> ClientConfig {
        ClientConfig {
            endpoint,
            headers: headers.unwrap_or_default(),
            timeout,
            retries: retries.unwrap_or(DEFAULT_RETRIES),
        }
    }
}

impl ClientConfig {
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the HTTP -> retry -> headers -> GraphQL stack
    pub fn graphql_service(&self) -> Result<GraphQLStack, KeepUpClientError> {
        let http_service =
            ReqwestService::new(&HttpServiceConfig::builder().and_timeout(self.timeout).build())
                .map_err(|err| KeepUpClientError::Service {
                    source: Box::new(err),
                })?;
        let http_service = ServiceBuilder::new()
            .layer(ExtendHeadersLayer::new(self.headers.clone()))
            .retry(RetryPolicy::new(self.retries))
            .service(http_service)
            .boxed_clone();
        tracing::debug!(endpoint = %self.endpoint, retries = self.retries, "built GraphQL service");
        Ok(ServiceBuilder::new()
            .layer(GraphQLLayer::new(self.endpoint.clone()))
            .service(http_service))
    }

    /// The viewer-profile operation on top of [`ClientConfig::graphql_service`]
    pub fn viewer(&self) -> Result<ViewerFetch<GraphQLStack>, KeepUpClientError> {
        Ok(ViewerFetch::new(self.graphql_service()?))
    }

    /// The viewer-tasks operation on top of [`ClientConfig::graphql_service`]
    pub fn viewer_tasks(&self) -> Result<ViewerTasksFetch<GraphQLStack>, KeepUpClientError> {
        Ok(ViewerTasksFetch::new(self.graphql_service()?))
    }
}
