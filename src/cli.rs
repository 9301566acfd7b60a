use clap::{Parser, Subcommand};
use timber::Level;

use crate::{
    command::{self, KeepUpOutput},
    utils::{env::KeepUpEnv, parsers::parse_level},
    KeepUpResult,
};

#[derive(Debug, Parser)]
#[command(
    name = "keep-up",
    version,
    about = "
keep-up - render your task tracker from the terminal

Show who you are signed in as:

    $ keep-up viewer --endpoint http://localhost:8080/graphql

List your tasks, refreshing every 30 seconds:

    $ keep-up tasks --poll 30s

Render a single task link without touching the network:

    $ keep-up task --id 42 --title 'Buy milk' --description 2%
"
)]
pub struct KeepUp {
    #[command(subcommand)]
    pub command: Command,

    /// Specify keep-up's log level. Failed queries are reported at `error`
    #[arg(
        long = "log",
        short = 'l',
        global = true,
        value_parser = parse_level,
        default_value = "error"
    )]
    pub log_level: Level,

    #[arg(skip)]
    pub env_store: KeepUpEnv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the name of the signed-in user
    Viewer(command::Viewer),

    /// List the signed-in user's tasks
    Tasks(command::Tasks),

    /// Render one task as a link to its page
    Task(command::Task),
}

impl KeepUp {
    pub fn run(&self) -> KeepUpResult<KeepUpOutput> {
        match &self.command {
            Command::Task(command) => command.run(),
            Command::Viewer(command) => self.block_on(command.run(&self.env_store)),
            Command::Tasks(command) => self.block_on(command.run(&self.env_store)),
        }
    }

    fn block_on<F>(&self, future: F) -> KeepUpResult<KeepUpOutput>
    where
        F: std::future::Future<Output = KeepUpResult<KeepUpOutput>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(future)
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use speculoos::prelude::*;
    use timber::Level;

    use super::{Command, KeepUp};

    #[test]
    fn the_cli_is_well_formed() {
        KeepUp::command().debug_assert();
    }

    #[test]
    fn log_level_is_global() {
        let app = KeepUp::parse_from(["keep-up", "task", "--id", "1", "--log", "DEBUG"]);
        assert_that!(app.log_level).is_equal_to(Level::DEBUG);
        assert!(matches!(app.command, Command::Task(_)));
    }

    #[test]
    fn errors_are_logged_by_default() {
        let app = KeepUp::parse_from(["keep-up", "viewer"]);
        assert_that!(app.log_level).is_equal_to(Level::ERROR);
    }

    #[test]
    fn it_runs_the_task_command_without_a_runtime() {
        let app = KeepUp::parse_from(["keep-up", "task", "--id", "a/b", "--title", "x"]);
        let stdout = app.run().unwrap().get_stdout().unwrap();
        assert_that!(stdout).contains(r#"href="/tasks/a%2Fb""#);
    }
}
