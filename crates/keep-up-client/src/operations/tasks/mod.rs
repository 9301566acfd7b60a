mod service;
mod types;

pub use service::{viewer_tasks_query, ViewerTasksFetch, ViewerTasksQuery, ViewerTasksRequest};
pub use types::TaskRecord;
