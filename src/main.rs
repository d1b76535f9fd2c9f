use anyhow::Result;
use clap::Parser;

use container_dashboard::{config, logging, server};

/// Web frontend for the Sonorx container API.
///
/// Settings come from environment variables (and `.env`); flags override them.
#[derive(Parser)]
#[command(name = "container-dashboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Remote API root, overrides `API_BASE_URL`
    #[arg(long)]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(api_base_url) = cli.api_base_url {
        config.api_base_url = api_base_url;
    }
    config.validate()?;

    logging::init(&config);
    config.print_summary();

    server::run(config).await
}
