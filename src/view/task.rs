//! One task as a link to its page plus its description.

use keep_up_client::operations::tasks::TaskRecord;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use super::{Element, Fragment, Tag};

/// Route every task page lives under
pub const TASKS_ROUTE: &str = "/tasks";

// the set the WHATWG URL standard percent-encodes in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// A task as handed to the view. Missing fields deserialize as empty strings.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<TaskRecord> for TaskItem {
    fn from(task: TaskRecord) -> Self {
        TaskItem {
            id: task.id,
            title: task.title,
            description: task.description,
        }
    }
}

impl From<&TaskRecord> for TaskItem {
    fn from(task: &TaskRecord) -> Self {
        TaskItem::from(task.clone())
    }
}

/// `/tasks/{id}`, with `id` encoded as a single path segment
pub fn task_path(id: &str) -> String {
    format!("{TASKS_ROUTE}/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// `<div><a href="/tasks/{id}">{title}</a><p>{description}</p></div>`
pub fn render(task: &TaskItem) -> Fragment {
    Element::new(Tag::Div)
        .child(
            Element::new(Tag::Link)
                .attribute("href", task_path(&task.id))
                .child(Fragment::text(task.title.as_str())),
        )
        .child(Fragment::paragraph(task.description.as_str()))
        .into()
}
