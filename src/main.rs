//! LogoSwap - rotate the fastfetch logo and recolor its modules
//!
//! Each run advances `logo.source` in a fastfetch config to the next image of
//! a fixed rotation and writes that image's palette into the `keyColor` of
//! every module category.

use clap::Parser;
use logoswap::cli::{ExitCode, SwapArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// LogoSwap - rotate the fastfetch logo and recolor module keys
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    swap: SwapArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; RUST_LOG overrides the flag
    let filter = if cli.verbose { "logoswap=debug" } else { "logoswap=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.swap.execute() {
        eprintln!("{}", e.message);
        std::process::exit(e.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
