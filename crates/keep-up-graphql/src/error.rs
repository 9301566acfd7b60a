use std::fmt;

use bytes::Bytes;
use http::StatusCode;

use crate::GraphQLResponse;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a [`crate::GraphQLService`] produced no usable `data`
#[derive(thiserror::Error, Debug)]
pub enum GraphQLServiceError<T: fmt::Debug> {
    /// `data` was absent or null
    #[error("the response contained no data{}", with_messages(.0))]
    NoData(Vec<graphql_client::Error>),
    /// `data` arrived alongside `errors`
    #[error("data was returned with errors: {}", joined(.errors))]
    PartialError {
        /// What the endpoint managed to resolve
        data: T,
        /// What it reported going wrong
        errors: Vec<graphql_client::Error>,
    },
    /// The body was not a GraphQL response of the expected shape
    #[error("could not decode the response (status {status}): {source}")]
    Undecodable {
        /// Why decoding failed
        source: serde_json::Error,
        /// The body as received
        body: Bytes,
        /// The HTTP status it came with
        status: StatusCode,
    },
    /// The query could not be turned into an HTTP request
    #[error("could not build the GraphQL request: {0}")]
    Request(BoxError),
    /// The HTTP transport failed
    #[error("{0}")]
    UpstreamService(BoxError),
}

impl<T: fmt::Debug> GraphQLServiceError<T> {
    /// Reconciles `data` with `errors`. An empty `errors` list counts as none.
    pub fn check(response: GraphQLResponse<T>) -> Result<T, GraphQLServiceError<T>> {
        match (response.data, response.errors.unwrap_or_default()) {
            (Some(data), errors) if errors.is_empty() => Ok(data),
            (Some(data), errors) => Err(GraphQLServiceError::PartialError { data, errors }),
            (None, errors) => Err(GraphQLServiceError::NoData(errors)),
        }
    }
}

/// The `message` of each error, space separated
pub(crate) fn joined(errors: &[graphql_client::Error]) -> String {
    errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn with_messages(errors: &[graphql_client::Error]) -> String {
    match errors {
        [] => String::new(),
        errors => format!(": {}", joined(errors)),
    }
}
