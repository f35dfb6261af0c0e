use clap::Parser;
use subdump::cli::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();
    subdump::cli::run(config).await
}
