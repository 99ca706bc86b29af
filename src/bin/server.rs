use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use wordfreq_analyzer::server;

/// Serve the word-frequency analyzer API and its frontend assets.
#[derive(Debug, Parser)]
#[command(name = "wordfreq-server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Directory holding the built frontend assets
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    server::serve(addr, args.static_dir).await
}
