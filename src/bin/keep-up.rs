use clap::Parser;
use keep_up::{cli::KeepUp, KeepUpResult};

use std::process;

fn main() {
    if let Err(error) = run() {
        tracing::debug!(?error);
        eprint!("{}", error);
        process::exit(1)
    } else {
        process::exit(0)
    }
}

fn run() -> KeepUpResult<()> {
    let app = KeepUp::parse();
    timber::init(app.log_level);
    tracing::trace!(command_structure = ?app);

    let output = app.run()?;
    output.print()?;
    Ok(())
}
