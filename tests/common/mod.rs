#![allow(dead_code)]

use chrono::NaiveDate;
use policies::*;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// In-memory stand-in for the policies table. Filter values are coerced
/// per column kind the way PostgreSQL would, and a bad coercion is an error.
#[derive(Default)]
pub struct Memory {
    rows: Mutex<BTreeMap<i64, Policy>>,
    down: AtomicBool,
}

impl Memory {
    pub fn with(policies: impl IntoIterator<Item = Policy>) -> Self {
        let memory = Self::default();
        memory
            .rows
            .lock()
            .unwrap()
            .extend(policies.into_iter().map(|p| (p.policy_id, p)));
        memory
    }
    /// Every subsequent operation fails, as if the connection dropped.
    pub fn outage(&self) {
        self.down.store(true, Ordering::SeqCst);
    }
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
    fn alive(&self) -> Result<(), String> {
        match self.down.load(Ordering::SeqCst) {
            true => Err("connection closed".to_string()),
            false => Ok(()),
        }
    }
    fn matching(&self, listing: &Listing) -> Result<Vec<Policy>, String> {
        self.alive()?;
        let rows = self.rows.lock().unwrap();
        let mut out = Vec::new();
        for policy in rows.values() {
            let mut keep = true;
            for (filter, value) in listing.predicates() {
                keep &= matches(policy, filter, value)?;
            }
            if keep {
                out.push(policy.clone());
            }
        }
        Ok(out)
    }
}

fn boolean(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "t" | "true" | "y" | "yes" | "on" | "1" => Ok(true),
        "f" | "false" | "n" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("invalid input syntax for type boolean: {:?}", value)),
    }
}

fn bigint(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid input syntax for type bigint: {:?}", value))
}

fn numeric(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid input syntax for type numeric: {:?}", value))
}

fn matches(policy: &Policy, filter: &Filter, value: &str) -> Result<bool, String> {
    let t = &policy.terms;
    Ok(match filter.column {
        "customer_region" => t.customer_region.as_deref() == Some(value),
        "vehicle_segment" => t.vehicle_segment.as_deref() == Some(value),
        "fuel" => t.fuel.as_deref() == Some(value),
        "customer_gender" => t.customer_gender.as_deref() == Some(value),
        "customer_income_group" => t.customer_income_group.as_deref() == Some(value),
        "policy_id" => policy.policy_id == bigint(value)?,
        "customer_id" => t.customer_id == Some(bigint(value)?),
        "premium" => t.premium == Some(numeric(value)?),
        "bodily_injury_liability" => t.bodily_injury_liability == Some(boolean(value)?),
        "personal_injury_protection" => t.personal_injury_protection == Some(boolean(value)?),
        "property_damage_liability" => t.property_damage_liability == Some(boolean(value)?),
        "collision" => t.collision == Some(boolean(value)?),
        "comprehensive" => t.comprehensive == Some(boolean(value)?),
        "customer_marital_status" => t.customer_marital_status == Some(boolean(value)?),
        other => return Err(format!("column {:?} does not exist", other)),
    })
}

impl PolicyRepository for Memory {
    type Error = String;

    async fn search(&self, listing: &Listing) -> Result<Vec<Policy>, String> {
        Ok(self
            .matching(listing)?
            .into_iter()
            .skip(listing.offset() as usize)
            .take(listing.limit() as usize)
            .collect())
    }

    async fn count(&self, listing: &Listing) -> Result<i64, String> {
        Ok(self.matching(listing)?.len() as i64)
    }

    async fn lookup(&self, id: i64) -> Result<Option<Policy>, String> {
        self.alive()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, policy: &Policy) -> Result<Policy, String> {
        self.alive()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.contains_key(&policy.policy_id) {
            true => Err(format!(
                "duplicate key value violates unique constraint (policy_id)=({})",
                policy.policy_id
            )),
            false => {
                rows.insert(policy.policy_id, policy.clone());
                Ok(policy.clone())
            }
        }
    }

    async fn update(&self, id: i64, terms: &Terms) -> Result<Option<Policy>, String> {
        self.alive()?;
        Ok(self.rows.lock().unwrap().get_mut(&id).map(|policy| {
            policy.terms = terms.clone();
            policy.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<u64, String> {
        self.alive()?;
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

/// A fully populated policy whose attributes vary with its id.
pub fn policy(id: i64) -> Policy {
    Policy::new(
        id,
        Terms {
            date_of_purchase: NaiveDate::from_ymd_opt(2018, 1 + (id % 12) as u32, 1 + (id % 28) as u32),
            customer_id: Some(id * 10),
            fuel: Some(["Petrol", "Diesel", "CNG"][(id % 3) as usize].to_string()),
            vehicle_segment: Some(["A", "B", "C"][(id % 3) as usize].to_string()),
            premium: Some(500.0 + id as f64),
            bodily_injury_liability: Some(id % 2 == 0),
            personal_injury_protection: Some(id % 3 == 0),
            property_damage_liability: Some(id % 5 == 0),
            collision: Some(id % 2 == 1),
            comprehensive: Some(true),
            customer_gender: Some(["Male", "Female"][(id % 2) as usize].to_string()),
            customer_income_group: Some("$25-$70K".to_string()),
            customer_region: Some(["North", "South", "East", "West"][(id % 4) as usize].to_string()),
            customer_marital_status: Some(id % 2 == 0),
        },
    )
}
