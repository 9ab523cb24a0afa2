use clap::Parser;
use fertilizer_advisor::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cli::serve::run().await,
        Command::Recommend(args) => cli::recommend::run(args),
        Command::Options(args) => cli::recommend::options(args),
    }
}
