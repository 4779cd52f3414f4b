//! Policy Server Binary
//!
//! Serves the policy CRUD API on HOST:PORT (default 0.0.0.0:3000).
//! A database that cannot be reached at startup is fatal.

use clap::Parser;
use policies::config::Config;
use policies::*;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::parse();
    if let Err(e) = log() {
        eprintln!("failed to initialize logging: {}", e);
    }
    let client = match database::db(&config.database_url).await {
        Ok(client) => client,
        Err(e) => {
            log::error!("failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };
    server::run(&config, client).await
}
