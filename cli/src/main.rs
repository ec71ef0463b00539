use clap::{Parser, Subcommand};
use commands::{
    decode::{run_decode, DecodeArgs},
    formats::run_formats,
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Decode(DecodeArgs),
    Formats,
}

fn main() -> anyhow::Result<()> {
    // log to stderr so decoded points on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Decode(args) => run_decode(args),
        Commands::Formats => run_formats(),
    }
}
