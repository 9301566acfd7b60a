use clap::Parser;
use keep_up_client::operations::tasks::ViewerTasksRequest;

use crate::{
    command::{watch::watch_query, KeepUpOutput},
    options::{ClientOpts, FormatOpt, PollOpt},
    utils::env::KeepUpEnv,
    view, KeepUpResult,
};

#[derive(Debug, Parser)]
pub struct Tasks {
    #[clap(flatten)]
    client: ClientOpts,

    #[clap(flatten)]
    poll: PollOpt,

    #[clap(flatten)]
    format: FormatOpt,
}

impl Tasks {
    pub async fn run(&self, env_store: &KeepUpEnv) -> KeepUpResult<KeepUpOutput> {
        let config = self.client.client_config(env_store)?;
        tracing::info!(endpoint = %config.endpoint(), "fetching the viewer's tasks");
        watch_query(
            config.viewer_tasks()?,
            ViewerTasksRequest,
            self.poll.poll,
            self.format.format,
            view::task_list::render,
        )
        .await?;
        Ok(KeepUpOutput::EmptySuccess)
    }
}
