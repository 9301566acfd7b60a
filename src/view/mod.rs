//! Views: pure functions from data (or the phase of a query) to a [`Fragment`].

use keep_up_client::FetchState;

pub mod fragment;
pub mod task;
pub mod task_list;
pub mod viewer;

pub use fragment::{Element, Fragment, Tag};

/// Rendered while a query is in flight
pub const LOADING_PLACEHOLDER: &str = "Loading...";
/// Rendered when a query failed; the cause only goes to the log
pub const ERROR_PLACEHOLDER: &str = "Error";

/// Maps the phase of `query` to a fragment, deferring to `succeeded` once data is available.
///
/// A failure is logged once per call at `error` level and never reaches the fragment.
pub(crate) fn render_phase<T>(
    query: &'static str,
    state: &FetchState<T>,
    succeeded: impl FnOnce(&T) -> Fragment,
) -> Fragment {
    match state {
        FetchState::Pending => Fragment::paragraph(LOADING_PLACEHOLDER),
        FetchState::Failed(error) => {
            tracing::error!(query, %error, "could not load {query}");
            Fragment::paragraph(ERROR_PLACEHOLDER)
        }
        FetchState::Succeeded(data) => succeeded(data),
    }
}
