use std::process::ExitCode;

use ascii_ramp_cli::{Cli, run};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level)).init();

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(grid) => {
            log::debug!("done: {}x{} grid", grid.width(), grid.height());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
