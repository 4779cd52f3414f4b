//! HTTP CRUD service for insurance policy records.
//!
//! A single PostgreSQL table of [`Policy`] rows, exposed over HTTP with
//! filtered pagination, lookup, create, full update and delete. A separate
//! fixture binary seeds the table from a JSON export.
//!
//! ## Modules
//!
//! - [`policy`] — Row model, static filter table, listing query builder
//! - [`repository`] — SQL for each operation behind [`PolicyRepository`]
//! - [`database`] — Connection bootstrap and table schema
//! - [`server`] — Router, handlers and HTTP server startup
//! - [`fixture`] — JSON fixture shape and bulk loader
//! - [`config`] — Command line and environment configuration
pub mod database;
pub mod policy;
pub mod repository;

#[cfg(feature = "database")]
pub mod config;
#[cfg(feature = "database")]
pub mod fixture;
#[cfg(feature = "server")]
pub mod server;

pub use policy::*;
pub use repository::*;

/// Request and query logging for the service: INFO to the terminal, DEBUG
/// to `logs/<unix secs>.log`. Failures are returned rather than raised so
/// `serve` can keep running on a read-only working directory.
#[cfg(feature = "database")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
