//! PostgreSQL connectivity and table metadata.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a connection from a URL
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`POLICIES`] / [`COLUMNS`] — Table name and canonical column order
mod schema;

pub use schema::*;

/// Table for insurance policy rows.
#[rustfmt::skip]
pub const POLICIES: &str = "policies";

/// Column list in the order [`crate::Policy`] reads rows.
/// `premium` is NUMERIC on disk and read back as FLOAT8.
#[rustfmt::skip]
pub const COLUMNS:  &str = const_format::concatcp!(
    "policy_id, ",
    "date_of_purchase, ",
    "customer_id, ",
    "fuel, ",
    "vehicle_segment, ",
    "premium::FLOAT8 AS premium, ",
    "bodily_injury_liability, ",
    "personal_injury_protection, ",
    "property_damage_liability, ",
    "collision, ",
    "comprehensive, ",
    "customer_gender, ",
    "customer_income_group, ",
    "customer_region, ",
    "customer_marital_status"
);

/// PostgreSQL error type alias.
#[cfg(feature = "database")]
pub type PgErr = tokio_postgres::Error;

/// Establishes a database connection.
///
/// The connection task is spawned onto the current runtime and logs if it
/// ever terminates with an error. Returns an `Arc<Client>` suitable for
/// sharing across handlers.
#[cfg(feature = "database")]
pub async fn db(url: &str) -> Result<std::sync::Arc<tokio_postgres::Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(std::sync::Arc::new(client))
}
