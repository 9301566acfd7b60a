#![deny(missing_docs)]

//! Sets up the `tracing` subscriber every keep-up binary logs through.
//!
//! Events always go to stderr, so a view printed on stdout can be piped on its own.

use std::io;

pub use tracing_core::Level;
use tracing_subscriber::fmt;

/// possible log levels, quietest first
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// How much context each event line carries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Detail {
    /// level and message only
    Terse,
    /// adds the module the event came from
    Targeted,
    /// adds timestamps and thread ids
    Full,
}

impl From<Level> for Detail {
    fn from(level: Level) -> Self {
        if level <= Level::WARN {
            Detail::Terse
        } else if level <= Level::DEBUG {
            Detail::Targeted
        } else {
            Detail::Full
        }
    }
}

/// Installs the global subscriber, printing events up to `level`.
///
/// Only the first call in a process has any effect.
pub fn init(level: Level) {
    let builder = fmt().with_max_level(level).with_writer(io::stderr);
    let installed = match Detail::from(level) {
        Detail::Terse => builder
            .without_time()
            .with_target(false)
            .compact()
            .try_init(),
        Detail::Targeted => builder.without_time().compact().try_init(),
        Detail::Full => builder.with_thread_ids(true).try_init(),
    };
    // a subscriber is already in place, e.g. one installed by a test harness
    installed.ok();
}
