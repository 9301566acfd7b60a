use std::fmt;

use http::StatusCode;
use keep_up_graphql::GraphQLServiceError;
use thiserror::Error;

/// KeepUpClientError represents all possible failures of a keep-up query.
///
/// Every variant ends up in [`crate::FetchState::Failed`].
#[derive(Error, Debug)]
pub enum KeepUpClientError {
    /// The endpoint answered, but `viewer` was null.
    #[error("the endpoint did not return a viewer")]
    NoViewer,

    /// The endpoint reported GraphQL errors.
    #[error("encountered a GraphQL error, the endpoint responded with: {msg}")]
    GraphQL {
        /// The error messages, joined.
        msg: String,
    },

    /// The response body did not match the expected shape.
    #[error("could not decode the response from the endpoint (status {status_code}): {source}")]
    MalformedResponse {
        /// The decoding error.
        source: serde_json::Error,
        /// Status of the HTTP response that carried the body.
        status_code: StatusCode,
    },

    /// The request never produced a response.
    #[error("could not reach the GraphQL endpoint: {source}")]
    Service {
        /// The underlying transport error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The service stack could not become ready.
    #[error("the GraphQL service is not ready: {}", .0)]
    ServiceReady(Box<dyn std::error::Error + Send + Sync>),
}

impl<T> From<GraphQLServiceError<T>> for KeepUpClientError
where
    T: Send + Sync + fmt::Debug + 'static,
{
    fn from(err: GraphQLServiceError<T>) -> Self {
        match err {
            GraphQLServiceError::NoData(errors) if errors.is_empty() => KeepUpClientError::GraphQL {
                msg: "the response contained no data".to_string(),
            },
            GraphQLServiceError::NoData(errors)
            | GraphQLServiceError::PartialError { errors, .. } => KeepUpClientError::GraphQL {
                msg: errors
                    .into_iter()
                    .map(|err| err.message)
                    .collect::<Vec<_>>()
                    .join(" "),
            },
            GraphQLServiceError::Undecodable { source, status, .. } => {
                KeepUpClientError::MalformedResponse {
                    source,
                    status_code: status,
                }
            }
            GraphQLServiceError::UpstreamService(source) => KeepUpClientError::Service { source },
            err @ GraphQLServiceError::Request(_) => KeepUpClientError::Service {
                source: Box::new(err),
            },
        }
    }
}
