use clap::Parser;
use std::net::SocketAddr;
use trendseed_core::config::Config;

#[derive(Parser)]
#[command(name = "trendseed", about = "trendseed — keyword suggestion and trend analysis API")]
struct Cli {
    /// Bind address for the HTTP server (overrides the config file).
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config load failed, falling back to defaults");
        Config::defaults()
    });

    trendseed_server::run(config, cli.bind).await
}
