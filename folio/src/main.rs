use std::process::ExitCode;

use clap::Parser;
use folio::args::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries reports; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    match folio::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[folio] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
