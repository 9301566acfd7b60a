use anyhow::Context;
use clap::Parser;

use crate::{
    command::KeepUpOutput,
    options::FormatOpt,
    view::{self, task::TaskItem},
    KeepUpResult,
};

/// Renders a single task without talking to any endpoint
#[derive(Debug, Parser)]
pub struct Task {
    /// The task's identifier, used for its link
    #[arg(long, required_unless_present = "json")]
    id: Option<String>,

    /// The link text
    #[arg(long, default_value = "")]
    title: String,

    /// Shown underneath the link
    #[arg(long, default_value = "")]
    description: String,

    /// The whole task as JSON, ex. '{"id":"42","title":"Buy milk"}'.
    /// Missing fields are treated as empty
    #[arg(long, conflicts_with_all = ["id", "title", "description"])]
    json: Option<String>,

    #[clap(flatten)]
    format: FormatOpt,
}

impl Task {
    pub fn run(&self) -> KeepUpResult<KeepUpOutput> {
        let task = self.task_item()?;
        tracing::debug!(?task, "rendering task");
        Ok(KeepUpOutput::view(
            view::task::render(&task),
            self.format.format,
        ))
    }

    fn task_item(&self) -> KeepUpResult<TaskItem> {
        if let Some(json) = &self.json {
            let task: TaskItem = serde_json::from_str(json).context("--json is not a valid task")?;
            return Ok(task);
        }
        Ok(TaskItem {
            id: self.id.clone().unwrap_or_default(),
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }
}
