use super::*;

/// Repository trait for policy database operations.
/// Abstracts SQL from the HTTP handlers.
#[allow(async_fn_in_trait)]
pub trait PolicyRepository {
    type Error: std::fmt::Display;
    /// One window of the filtered set, ascending by `policy_id`.
    async fn search(&self, listing: &Listing) -> Result<Vec<Policy>, Self::Error>;
    /// Size of the filtered set, ignoring the window.
    async fn count(&self, listing: &Listing) -> Result<i64, Self::Error>;
    async fn lookup(&self, id: i64) -> Result<Option<Policy>, Self::Error>;
    async fn create(&self, policy: &Policy) -> Result<Policy, Self::Error>;
    /// Overwrites every non-key column. `None` when no row has this key.
    async fn update(&self, id: i64, terms: &Terms) -> Result<Option<Policy>, Self::Error>;
    /// Number of rows removed; zero is not an error.
    async fn delete(&self, id: i64) -> Result<u64, Self::Error>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use crate::database::*;
    use std::sync::Arc;
    use tokio_postgres::Client;
    use tokio_postgres::types::ToSql;

    #[rustfmt::skip]
    const LOOKUP: &str = const_format::concatcp!(
        "SELECT ", COLUMNS, " ",
        "FROM   ", POLICIES, " ",
        "WHERE  policy_id = $1"
    );

    #[rustfmt::skip]
    const INSERT: &str = const_format::concatcp!(
        "INSERT INTO ", POLICIES, " (",
            "policy_id, date_of_purchase, customer_id, fuel, vehicle_segment, ",
            "premium, bodily_injury_liability, personal_injury_protection, ",
            "property_damage_liability, collision, comprehensive, ",
            "customer_gender, customer_income_group, customer_region, ",
            "customer_marital_status",
        ") VALUES ($1, $2, $3, $4, $5, $6::FLOAT8, $7, $8, $9, $10, $11, $12, $13, $14, $15) ",
        "RETURNING ", COLUMNS
    );

    #[rustfmt::skip]
    const UPDATE: &str = const_format::concatcp!(
        "UPDATE ", POLICIES, " SET ",
            "date_of_purchase           = $1, ",
            "customer_id                = $2, ",
            "fuel                       = $3, ",
            "vehicle_segment            = $4, ",
            "premium                    = $5::FLOAT8, ",
            "bodily_injury_liability    = $6, ",
            "personal_injury_protection = $7, ",
            "property_damage_liability  = $8, ",
            "collision                  = $9, ",
            "comprehensive              = $10, ",
            "customer_gender            = $11, ",
            "customer_income_group      = $12, ",
            "customer_region            = $13, ",
            "customer_marital_status    = $14 ",
        "WHERE policy_id = $15 ",
        "RETURNING ", COLUMNS
    );

    #[rustfmt::skip]
    const DELETE: &str = const_format::concatcp!(
        "DELETE FROM ", POLICIES, " ",
        "WHERE  policy_id = $1"
    );

    /// Non-key columns in the order INSERT and UPDATE bind them.
    fn binds(terms: &Terms) -> [&(dyn ToSql + Sync); 14] {
        [
            &terms.date_of_purchase,
            &terms.customer_id,
            &terms.fuel,
            &terms.vehicle_segment,
            &terms.premium,
            &terms.bodily_injury_liability,
            &terms.personal_injury_protection,
            &terms.property_damage_liability,
            &terms.collision,
            &terms.comprehensive,
            &terms.customer_gender,
            &terms.customer_income_group,
            &terms.customer_region,
            &terms.customer_marital_status,
        ]
    }

    impl PolicyRepository for Arc<Client> {
        type Error = PgErr;

        async fn search(&self, listing: &Listing) -> Result<Vec<Policy>, PgErr> {
            let values = listing.values();
            let limit = listing.limit();
            let offset = listing.offset();
            let params = values
                .iter()
                .map(|v| v as &(dyn ToSql + Sync))
                .chain([&limit as &(dyn ToSql + Sync), &offset])
                .collect::<Vec<_>>();
            self.query(listing.select().as_str(), &params)
                .await
                .map(|rows| rows.into_iter().map(Policy::from).collect())
        }

        async fn count(&self, listing: &Listing) -> Result<i64, PgErr> {
            let values = listing.values();
            let params = values
                .iter()
                .map(|v| v as &(dyn ToSql + Sync))
                .collect::<Vec<_>>();
            self.query_one(listing.count().as_str(), &params)
                .await
                .map(|row| row.get::<_, i64>(0))
        }

        async fn lookup(&self, id: i64) -> Result<Option<Policy>, PgErr> {
            self.query_opt(LOOKUP, &[&id])
                .await
                .map(|opt| opt.map(Policy::from))
        }

        async fn create(&self, policy: &Policy) -> Result<Policy, PgErr> {
            let params = std::iter::once(&policy.policy_id as &(dyn ToSql + Sync))
                .chain(binds(&policy.terms))
                .collect::<Vec<_>>();
            self.query_one(INSERT, &params).await.map(Policy::from)
        }

        async fn update(&self, id: i64, terms: &Terms) -> Result<Option<Policy>, PgErr> {
            let params = binds(terms)
                .into_iter()
                .chain(std::iter::once(&id as &(dyn ToSql + Sync)))
                .collect::<Vec<_>>();
            self.query_opt(UPDATE, &params)
                .await
                .map(|opt| opt.map(Policy::from))
        }

        async fn delete(&self, id: i64) -> Result<u64, PgErr> {
            self.execute(DELETE, &[&id]).await
        }
    }
}
