use serde::{Deserialize, Serialize};

use super::service::viewer_query;

pub(crate) type QueryResponseData = viewer_query::ResponseData;
pub(crate) type QueryViewer = viewer_query::ViewerQueryViewer;

/// Name and email of the user the session belongs to
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ViewerRecord {
    pub name: String,
    pub email: String,
}

impl From<QueryViewer> for ViewerRecord {
    fn from(viewer: QueryViewer) -> Self {
        ViewerRecord {
            name: viewer.name,
            email: viewer.email,
        }
    }
}
