//! css-doctor - Diagnose empty or stale storefront CSS compilation

use clap::Parser;
use tracing_subscriber::EnvFilter;

use css_doctor::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so the stdout report stays byte-for-byte reproducible.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CSS_DOCTOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
