use graphql_client::GraphQLQuery;
use keep_up_graphql::{GraphQLRequest, GraphQLServiceError};
use keep_up_tower::{replace_ready_service, ResponseFuture};
use tower::Service;

use super::types::{QueryResponseData, TaskRecord};
use crate::KeepUpClientError;

#[derive(GraphQLQuery)]
// The paths are relative to the directory where your `Cargo.toml` is located.
#[graphql(
    query_path = "src/operations/tasks/viewer_tasks_query.graphql",
    schema_path = ".schema/schema.graphql",
    response_derives = "Eq, PartialEq, Debug, Serialize, Deserialize",
    deprecated = "warn"
)]
/// Snake case of this name is the mod name. i.e. viewer_tasks_query
pub struct ViewerTasksQuery;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ViewerTasksRequest;

/// Resolves a [`ViewerTasksRequest`] into the viewer's tasks, in the order the endpoint
/// returned them
#[derive(Clone, Debug)]
pub struct ViewerTasksFetch<S: Clone> {
    inner: S,
}

impl<S: Clone> ViewerTasksFetch<S> {
    pub fn new(inner: S) -> ViewerTasksFetch<S> {
        ViewerTasksFetch { inner }
    }
}

impl<S> Service<ViewerTasksRequest> for ViewerTasksFetch<S>
where
    S: Service<
            GraphQLRequest<ViewerTasksQuery>,
            Response = QueryResponseData,
            Error = GraphQLServiceError<QueryResponseData>,
        > + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = Vec<TaskRecord>;
    type Error = KeepUpClientError;
    type Future = ResponseFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::<GraphQLRequest<ViewerTasksQuery>>::poll_ready(&mut self.inner, cx)
            .map_err(|err| KeepUpClientError::ServiceReady(Box::new(err)))
    }

    fn call(&mut self, _req: ViewerTasksRequest) -> Self::Future {
        let mut inner =
            replace_ready_service::<_, GraphQLRequest<ViewerTasksQuery>>(&mut self.inner);
        let fut = async move {
            inner
                .call(GraphQLRequest::new(viewer_tasks_query::Variables {}))
                .await
                .map_err(KeepUpClientError::from)
                .and_then(get_tasks_from_response_data)
        };
        Box::pin(fut)
    }
}

fn get_tasks_from_response_data(
    response_data: QueryResponseData,
) -> Result<Vec<TaskRecord>, KeepUpClientError> {
    let viewer = response_data.viewer.ok_or(KeepUpClientError::NoViewer)?;
    Ok(viewer.tasks.into_iter().map(TaskRecord::from).collect())
}
