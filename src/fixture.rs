//! Offline seeding of the policies table from a JSON export.
//!
//! The export is an array of objects keyed the way the source spreadsheet
//! names its columns. Coverage and marital flags are `1` for true; any other
//! value, or a missing key, is false.
use crate::database::Schema;
use crate::*;
use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tokio_postgres::Client;

const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d"];

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "Policy_id")]
    pub policy_id: i64,
    #[serde(rename = "Date of Purchase", default)]
    pub date_of_purchase: Option<String>,
    #[serde(rename = "Customer_id", default)]
    pub customer_id: Option<i64>,
    #[serde(rename = "Fuel", default)]
    pub fuel: Option<String>,
    #[serde(rename = "VEHICLE_SEGMENT", default)]
    pub vehicle_segment: Option<String>,
    #[serde(rename = "Premium", default)]
    pub premium: Option<f64>,
    #[serde(rename = "bodily injury liability", default)]
    pub bodily_injury_liability: Option<f64>,
    #[serde(rename = "personal injury protection", default)]
    pub personal_injury_protection: Option<f64>,
    #[serde(rename = "property damage liability", default)]
    pub property_damage_liability: Option<f64>,
    #[serde(default)]
    pub collision: Option<f64>,
    #[serde(default)]
    pub comprehensive: Option<f64>,
    #[serde(rename = "Customer_Gender", default)]
    pub customer_gender: Option<String>,
    #[serde(rename = "Customer_Income group", default)]
    pub customer_income_group: Option<String>,
    #[serde(rename = "Customer_Region", default)]
    pub customer_region: Option<String>,
    #[serde(rename = "Customer_Marital_status", default)]
    pub customer_marital_status: Option<f64>,
}

fn flag(value: Option<f64>) -> Option<bool> {
    Some(value == Some(1.0))
}

fn date(raw: &str) -> anyhow::Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
        .ok_or_else(|| anyhow::anyhow!("unrecognized date {:?}", raw))
}

impl TryFrom<Record> for Policy {
    type Error = anyhow::Error;
    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let date_of_purchase = match record.date_of_purchase.as_deref() {
            None => None,
            Some(raw) => Some(date(raw).with_context(|| format!("policy {}", record.policy_id))?),
        };
        Ok(Policy::new(
            record.policy_id,
            Terms {
                date_of_purchase,
                customer_id: record.customer_id,
                fuel: record.fuel,
                vehicle_segment: record.vehicle_segment,
                premium: record.premium,
                bodily_injury_liability: flag(record.bodily_injury_liability),
                personal_injury_protection: flag(record.personal_injury_protection),
                property_damage_liability: flag(record.property_damage_liability),
                collision: flag(record.collision),
                comprehensive: flag(record.comprehensive),
                customer_gender: record.customer_gender,
                customer_income_group: record.customer_income_group,
                customer_region: record.customer_region,
                customer_marital_status: flag(record.customer_marital_status),
            },
        ))
    }
}

/// Read and convert every record in the file, failing on the first bad one.
pub fn read(path: &Path) -> anyhow::Result<Vec<Policy>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading fixture {}", path.display()))?;
    serde_json::from_str::<Vec<Record>>(&text)
        .with_context(|| format!("parsing fixture {}", path.display()))?
        .into_iter()
        .map(Policy::try_from)
        .collect()
}

/// Create the table and its indices if absent, optionally emptying it.
pub async fn prepare(client: &Client, fresh: bool) -> anyhow::Result<()> {
    client
        .batch_execute(Policy::creates())
        .await
        .context("creating table")?;
    client
        .batch_execute(Policy::indices())
        .await
        .context("creating indices")?;
    log::info!("table {} created or already exists", Policy::name());
    if fresh {
        client
            .batch_execute(Policy::truncates())
            .await
            .context("truncating table")?;
        log::info!("table {} truncated", Policy::name());
    }
    Ok(())
}

/// Insert policies in order, stopping at the first failure.
pub async fn load<R: PolicyRepository>(repo: &R, policies: Vec<Policy>) -> anyhow::Result<usize> {
    let total = policies.len();
    for (i, policy) in policies.into_iter().enumerate() {
        repo.create(&policy)
            .await
            .map_err(|e| anyhow::anyhow!("inserting policy {}: {}", policy.policy_id, e))?;
        if (i + 1) % 1000 == 0 {
            log::debug!("inserted {}/{} policies", i + 1, total);
        }
    }
    log::info!("inserted {} policies", total);
    Ok(total)
}
