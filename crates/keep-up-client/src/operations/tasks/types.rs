use serde::{Deserialize, Serialize};

use super::service::viewer_tasks_query;

pub(crate) type QueryResponseData = viewer_tasks_query::ResponseData;
pub(crate) type QueryTask = viewer_tasks_query::ViewerTasksQueryViewerTasks;

/// One task owned by the viewer
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<QueryTask> for TaskRecord {
    fn from(task: QueryTask) -> Self {
        TaskRecord {
            id: task.id,
            title: task.title,
            description: task.description,
        }
    }
}
