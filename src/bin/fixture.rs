//! Fixture Loader Binary
//!
//! Creates the policies table if needed and inserts every record from a
//! JSON export. Run once, offline, before serving.

use clap::Parser;
use policies::config::Seed;
use policies::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let seed = Seed::parse();
    log()?;
    let policies = fixture::read(&seed.file)?;
    log::info!("read {} records from {}", policies.len(), seed.file.display());
    let client = database::db(&seed.database_url).await?;
    fixture::prepare(&client, seed.fresh).await?;
    fixture::load(&client, policies).await?;
    Ok(())
}
