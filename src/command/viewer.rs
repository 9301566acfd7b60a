use clap::Parser;
use keep_up_client::operations::viewer::ViewerRequest;

use crate::{
    command::{watch::watch_query, KeepUpOutput},
    options::{ClientOpts, FormatOpt, PollOpt},
    utils::env::KeepUpEnv,
    view, KeepUpResult,
};

#[derive(Debug, Parser)]
pub struct Viewer {
    #[clap(flatten)]
    client: ClientOpts,

    #[clap(flatten)]
    poll: PollOpt,

    #[clap(flatten)]
    format: FormatOpt,
}

impl Viewer {
    pub async fn run(&self, env_store: &KeepUpEnv) -> KeepUpResult<KeepUpOutput> {
        let config = self.client.client_config(env_store)?;
        tracing::info!(endpoint = %config.endpoint(), "fetching the viewer");
        watch_query(
            config.viewer()?,
            ViewerRequest,
            self.poll.poll,
            self.format.format,
            view::viewer::render,
        )
        .await?;
        Ok(KeepUpOutput::EmptySuccess)
    }
}
