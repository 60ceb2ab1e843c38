pub mod args;
pub mod cli;
pub mod config;
pub mod error;

pub use args::MavenArgs;
pub use error::MvnargsError;

use std::io::Write;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::info;
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};

pub fn init_logging(log_level: cli::LogLevel) -> Result<()> {
    let filter = match log_level {
        cli::LogLevel::Trace => LevelFilter::TRACE,
        cli::LogLevel::Debug => LevelFilter::DEBUG,
        cli::LogLevel::Info => LevelFilter::INFO,
        cli::LogLevel::Warn => LevelFilter::WARN,
        cli::LogLevel::Error => LevelFilter::ERROR,
    };

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .context("failed to set global default tracing subscriber")
}

/// Loads the invocation file, appends any extra goals and writes the
/// rendered arguments to `out`.
pub fn run_render(opts: &cli::RenderArgs, out: &mut impl Write) -> Result<()> {
    let mut invocation = config::load_invocation(opts.file.as_path())
        .with_context(|| format!("failed to load invocation from {}", opts.file))?;
    invocation.goals(opts.goals.iter().cloned());

    let tokens = invocation.render();
    info!("rendered {} argument(s) from {}", tokens.len(), opts.file);

    if opts.tokens {
        for token in &tokens {
            writeln!(out, "{}", token).context("failed to write arguments")?;
        }
    } else {
        writeln!(out, "{}", tokens.join(" ")).context("failed to write arguments")?;
    }

    Ok(())
}

/// Writes the option table, one `flag kind field` row per option.
pub fn run_flags(out: &mut impl Write) -> Result<()> {
    for option in args::FLAG_TABLE {
        writeln!(out, "{:<6} {:<12} {}", option.flag(), option.kind().to_string(), option.field())
            .context("failed to write option table")?;
    }
    Ok(())
}

pub fn run_completions(opts: &cli::CompletionsArgs, out: &mut impl Write) {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(opts.shell, &mut cmd, name, out);
}
