use std::io;
use std::process;

use anyhow::Result;
use mvnargs::cli;
use tracing::error;

fn main() -> Result<()> {
    let args = cli::parse_args()?;

    let log_level = match &args.command {
        cli::Commands::Render(opts) => opts.log_level,
        cli::Commands::Flags(opts) => opts.log_level,
        cli::Commands::Completions(_) => cli::LogLevel::Error,
    };
    mvnargs::init_logging(log_level)?;

    let mut stdout = io::stdout().lock();
    let result = match &args.command {
        cli::Commands::Render(opts) => mvnargs::run_render(opts, &mut stdout),
        cli::Commands::Flags(_) => mvnargs::run_flags(&mut stdout),
        cli::Commands::Completions(opts) => {
            mvnargs::run_completions(opts, &mut stdout);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }

    Ok(())
}
