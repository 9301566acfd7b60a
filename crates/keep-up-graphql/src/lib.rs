#![warn(missing_docs)]

//! Typed GraphQL queries over keep-up's HTTP transport

use std::fmt;

use graphql_client::GraphQLQuery;

mod error;
mod service;

pub use error::GraphQLServiceError;
pub use service::{GraphQLLayer, GraphQLService};

/// What a keep-up endpoint answers, before `data` and `errors` are reconciled
pub type GraphQLResponse<T> = graphql_client::Response<T>;

/// The variables of one execution of `Q`
pub struct GraphQLRequest<Q: GraphQLQuery> {
    variables: Q::Variables,
}

impl<Q: GraphQLQuery> GraphQLRequest<Q> {
    /// Prepares `Q` with `variables`
    pub const fn new(variables: Q::Variables) -> GraphQLRequest<Q> {
        GraphQLRequest { variables }
    }

    fn into_body(self) -> graphql_client::QueryBody<Q::Variables> {
        Q::build_query(self.variables)
    }
}

impl<Q> fmt::Debug for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GraphQLRequest").field(&self.variables).finish()
    }
}
