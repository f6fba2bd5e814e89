use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod input;
mod logging;
mod report;

use cli::Cli;
use input::Source;
use report::render_output;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_format);

    let source = Source::from_arg(cli.input.as_deref());
    info!(%source, "loading records");
    let result = input::load(&source)?;
    info!(
        records = result.len(),
        alive = result.alive_count(),
        categories = result.summary.len(),
        "assessment ready"
    );

    print!("{}", render_output(&source, &result, cli.pretty, cli.metrics)?);

    Ok(())
}
