mod service;
mod types;

pub use service::{viewer_query, ViewerFetch, ViewerQuery, ViewerRequest};
pub use types::ViewerRecord;
