use clap::{Parser, ValueEnum};

/// How a rendered view is written to stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The fragment serialized as HTML
    #[default]
    Html,
    /// One line per block of text, links followed by their target
    Plain,
}

#[derive(Debug, Parser)]
pub struct FormatOpt {
    /// Print the view as HTML or as plain text
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,
}
