pub mod cli;
pub mod command;
mod error;
pub mod options;
pub mod utils;
pub mod view;

pub use command::KeepUpOutput;
pub use error::{KeepUpError, KeepUpErrorSuggestion, KeepUpResult};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
