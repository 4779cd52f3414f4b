use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

/// One insurance policy row. The key is immutable once inserted;
/// everything else lives in [`Terms`] and is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_id: i64,
    #[serde(flatten)]
    pub terms: Terms,
}

/// Every non-key column of a policy. Absent JSON fields become `None`
/// and are written as NULL, so an update is a full overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Terms {
    #[serde(default)]
    pub date_of_purchase: Option<NaiveDate>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub fuel: Option<String>,
    #[serde(default)]
    pub vehicle_segment: Option<String>,
    #[serde(default)]
    pub premium: Option<f64>,
    #[serde(default)]
    pub bodily_injury_liability: Option<bool>,
    #[serde(default)]
    pub personal_injury_protection: Option<bool>,
    #[serde(default)]
    pub property_damage_liability: Option<bool>,
    #[serde(default)]
    pub collision: Option<bool>,
    #[serde(default)]
    pub comprehensive: Option<bool>,
    #[serde(default)]
    pub customer_gender: Option<String>,
    #[serde(default)]
    pub customer_income_group: Option<String>,
    #[serde(default)]
    pub customer_region: Option<String>,
    #[serde(default)]
    pub customer_marital_status: Option<bool>,
}

impl Policy {
    pub fn new(policy_id: i64, terms: Terms) -> Self {
        Self { policy_id, terms }
    }
}

/// Rows are read with the column order of [`crate::database::COLUMNS`].
#[cfg(feature = "database")]
impl From<tokio_postgres::Row> for Policy {
    fn from(row: tokio_postgres::Row) -> Self {
        Self {
            policy_id: row.get::<_, i64>(0),
            terms: Terms {
                date_of_purchase: row.get(1),
                customer_id: row.get(2),
                fuel: row.get(3),
                vehicle_segment: row.get(4),
                premium: row.get(5),
                bodily_injury_liability: row.get(6),
                personal_injury_protection: row.get(7),
                property_damage_liability: row.get(8),
                collision: row.get(9),
                comprehensive: row.get(10),
                customer_gender: row.get(11),
                customer_income_group: row.get(12),
                customer_region: row.get(13),
                customer_marital_status: row.get(14),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_json_shape() {
        let policy = Policy::new(
            9001,
            Terms {
                fuel: Some("Petrol".into()),
                premium: Some(500.0),
                date_of_purchase: NaiveDate::from_ymd_opt(2018, 1, 16),
                collision: Some(true),
                ..Terms::default()
            },
        );
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["policy_id"], 9001);
        assert_eq!(json["fuel"], "Petrol");
        assert_eq!(json["premium"], 500.0);
        assert_eq!(json["date_of_purchase"], "2018-01-16");
        assert_eq!(json["collision"], true);
        assert!(json["customer_region"].is_null());
        assert!(json.get("terms").is_none());
    }

    #[test]
    fn missing_fields_deserialize_as_null() {
        let terms = serde_json::from_str::<Terms>(r#"{"fuel":"CNG"}"#).unwrap();
        assert_eq!(terms.fuel.as_deref(), Some("CNG"));
        assert_eq!(terms.premium, None);
        assert_eq!(terms.customer_marital_status, None);
    }

    #[test]
    fn update_body_ignores_key() {
        let terms = serde_json::from_str::<Terms>(r#"{"policy_id":7,"premium":12.5}"#).unwrap();
        assert_eq!(terms.premium, Some(12.5));
    }

    #[test]
    fn create_body_requires_key() {
        assert!(serde_json::from_str::<Policy>(r#"{"fuel":"CNG"}"#).is_err());
        let policy = serde_json::from_str::<Policy>(r#"{"policy_id":12,"fuel":"CNG"}"#).unwrap();
        assert_eq!(policy.policy_id, 12);
        assert_eq!(policy.terms.fuel.as_deref(), Some("CNG"));
    }
}
