//! The signed-in user's name, driven by `{ viewer { name email } }`.

use keep_up_client::{operations::viewer::ViewerRecord, FetchState};

use super::{render_phase, Fragment};

/// `<p>Loading...</p>`, `<p>Error</p>` or the viewer's name as a bare text node
pub fn render(state: &FetchState<ViewerRecord>) -> Fragment {
    render_phase("viewer", state, |viewer| Fragment::text(viewer.name.as_str()))
}
