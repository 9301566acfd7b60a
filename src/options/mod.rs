mod client;
mod format;
mod poll;

pub(crate) use client::ClientOpts;
pub use client::DEFAULT_ENDPOINT;
pub(crate) use format::FormatOpt;
pub use format::OutputFormat;
pub(crate) use poll::PollOpt;
