use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use zsh_customizer::cli::Cli;
use zsh_customizer::logging;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    cli.execute()
}
