use super::POLICIES;
use crate::Policy;

/// Schema metadata for PostgreSQL tables.
///
/// Pure SQL text, no I/O. All methods return `&'static str` built at
/// compile time with [`const_format::concatcp!`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
    /// Returns `TRUNCATE TABLE` statement for clearing data.
    fn truncates() -> &'static str;
}

impl Schema for Policy {
    fn name() -> &'static str {
        POLICIES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            POLICIES,
            " (
                policy_id                   BIGINT PRIMARY KEY,
                date_of_purchase            DATE,
                customer_id                 BIGINT,
                fuel                        VARCHAR(50),
                vehicle_segment             VARCHAR(10),
                premium                     NUMERIC,
                bodily_injury_liability     BOOLEAN,
                personal_injury_protection  BOOLEAN,
                property_damage_liability   BOOLEAN,
                collision                   BOOLEAN,
                comprehensive               BOOLEAN,
                customer_gender             VARCHAR(10),
                customer_income_group       VARCHAR(50),
                customer_region             VARCHAR(50),
                customer_marital_status     BOOLEAN
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_",
            POLICIES,
            "_region   ON ",
            POLICIES,
            " (customer_region);
             CREATE INDEX IF NOT EXISTS idx_",
            POLICIES,
            "_segment  ON ",
            POLICIES,
            " (vehicle_segment);
             CREATE INDEX IF NOT EXISTS idx_",
            POLICIES,
            "_customer ON ",
            POLICIES,
            " (customer_id);"
        )
    }
    fn truncates() -> &'static str {
        const_format::concatcp!("TRUNCATE TABLE ", POLICIES, ";")
    }
}
