use aqi_scraper::cli::{run, Cli};
use aqi_scraper::error::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
