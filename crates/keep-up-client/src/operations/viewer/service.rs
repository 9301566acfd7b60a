use graphql_client::GraphQLQuery;
use keep_up_graphql::{GraphQLRequest, GraphQLServiceError};
use keep_up_tower::{replace_ready_service, ResponseFuture};
use tower::Service;

use super::types::{QueryResponseData, ViewerRecord};
use crate::KeepUpClientError;

#[derive(GraphQLQuery)]
// The paths are relative to the directory where your `Cargo.toml` is located.
#[graphql(
    query_path = "src/operations/viewer/viewer_query.graphql",
    schema_path = ".schema/schema.graphql",
    response_derives = "Eq, PartialEq, Debug, Serialize, Deserialize",
    deprecated = "warn"
)]
/// This struct is used to generate the module containing `Variables` and
/// `ResponseData` structs.
/// Snake case of this name is the mod name. i.e. viewer_query
pub struct ViewerQuery;

/// Asks for the viewer's profile. The query takes no variables.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ViewerRequest;

/// Resolves a [`ViewerRequest`] into a [`ViewerRecord`] through a GraphQL service
#[derive(Clone, Debug)]
pub struct ViewerFetch<S: Clone> {
    inner: S,
}

impl<S: Clone> ViewerFetch<S> {
    pub fn new(inner: S) -> ViewerFetch<S> {
        ViewerFetch { inner }
    }
}

impl<S> Service<ViewerRequest> for ViewerFetch<S>
where
    S: Service<
            GraphQLRequest<ViewerQuery>,
            Response = QueryResponseData,
            Error = GraphQLServiceError<QueryResponseData>,
        > + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ViewerRecord;
    type Error = KeepUpClientError;
    type Future = ResponseFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::<GraphQLRequest<ViewerQuery>>::poll_ready(&mut self.inner, cx)
            .map_err(|err| KeepUpClientError::ServiceReady(Box::new(err)))
    }

    fn call(&mut self, _req: ViewerRequest) -> Self::Future {
        let mut inner = replace_ready_service::<_, GraphQLRequest<ViewerQuery>>(&mut self.inner);
        let fut = async move {
            let response_data = inner
                .call(GraphQLRequest::new(viewer_query::Variables {}))
                .await
                .map_err(KeepUpClientError::from)?;
            get_viewer_from_response_data(response_data)
        };
        Box::pin(fut)
    }
}

fn get_viewer_from_response_data(
    response_data: QueryResponseData,
) -> Result<ViewerRecord, KeepUpClientError> {
    response_data
        .viewer
        .map(ViewerRecord::from)
        .ok_or(KeepUpClientError::NoViewer)
}

#[cfg(test)]
mod tests {
    use keep_up_graphql::{GraphQLRequest, GraphQLServiceError};
    use keep_up_tower::test::{mock_service, Responder};
    use rstest::rstest;
    use serde_json::{json, Value};
    use speculoos::prelude::*;
    use tower::{Service, ServiceExt};

    use super::*;

    mock_service!(
        ViewerGraphQL,
        GraphQLRequest<ViewerQuery>,
        QueryResponseData,
        GraphQLServiceError<QueryResponseData>
    );

    #[rstest]
    #[case::viewer(
        json!({ "viewer": { "name": "Ada", "email": "ada@example.com" } }),
        Some(ViewerRecord { name: "Ada".to_string(), email: "ada@example.com".to_string() })
    )]
    #[case::no_viewer(json!({ "viewer": null }), None)]
    fn get_viewer_from_response_data_works(
        #[case] json_response: Value,
        #[case] expected: Option<ViewerRecord>,
    ) {
        let data: viewer_query::ResponseData = serde_json::from_value(json_response).unwrap();
        let output = get_viewer_from_response_data(data);

        match expected {
            Some(expected) => assert_that!(output).is_ok().is_equal_to(expected),
            None => {
                assert_that!(output)
                    .is_err()
                    .matches(|err| matches!(err, KeepUpClientError::NoViewer));
            }
        }
    }

    #[rstest]
    #[case::missing_name(json!({ "viewer": { "email": "ada@example.com" } }))]
    #[case::null_name(json!({ "viewer": { "name": null, "email": "ada@example.com" } }))]
    fn viewer_without_a_name_does_not_decode(#[case] json_response: Value) {
        let data = serde_json::from_value::<viewer_query::ResponseData>(json_response);
        assert_that!(data).is_err();
    }

    #[tokio::test]
    async fn fetches_the_viewer_through_the_graphql_service() {
        let mut mock = MockViewerGraphQL::new();
        mock.expect_respond().times(1).returning(|_| {
            Ok(QueryResponseData {
                viewer: Some(viewer_query::ViewerQueryViewer {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                }),
            })
        });
        let mut service = ViewerFetch::new(Responder::new(mock));

        let record = service.ready().await.unwrap().call(ViewerRequest).await;

        assert_that!(record).is_ok().is_equal_to(ViewerRecord {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        });
    }

    #[tokio::test]
    async fn graphql_errors_become_client_errors() {
        let mut mock = MockViewerGraphQL::new();
        mock.expect_respond().times(1).returning(|_| {
            Err(GraphQLServiceError::NoData(vec![graphql_client::Error {
                message: "no session".to_string(),
                locations: None,
                path: None,
                extensions: None,
            }]))
        });
        let mut service = ViewerFetch::new(Responder::new(mock));

        let record = service.ready().await.unwrap().call(ViewerRequest).await;

        assert_that!(record).is_err().matches(
            |err| matches!(err, KeepUpClientError::GraphQL { msg } if msg == "no session"),
        );
    }
}
