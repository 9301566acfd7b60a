//! The viewer's tasks, driven by `{ viewer { tasks { id title description } } }`.

use keep_up_client::{operations::tasks::TaskRecord, FetchState};

use super::{
    render_phase,
    task::{self, TaskItem},
    Element, Fragment, Tag,
};

/// Rendered when the viewer has no tasks
pub const EMPTY_PLACEHOLDER: &str = "No tasks";

/// Loading and error placeholders as for the viewer, then one list item per task
pub fn render(state: &FetchState<Vec<TaskRecord>>) -> Fragment {
    render_phase("tasks", state, |tasks| {
        if tasks.is_empty() {
            return Fragment::paragraph(EMPTY_PLACEHOLDER);
        }
        let items = tasks.iter().map(|record| {
            Element::new(Tag::ListItem).child(task::render(&TaskItem::from(record)))
        });
        Element::new(Tag::List).children(items).into()
    })
}
