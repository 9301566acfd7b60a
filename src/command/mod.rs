pub(crate) mod output;
mod task;
mod tasks;
mod viewer;
mod watch;

pub use output::KeepUpOutput;
pub use task::Task;
pub use tasks::Tasks;
pub use viewer::Viewer;
