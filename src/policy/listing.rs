use super::Filter;
use crate::database::COLUMNS;
use crate::database::POLICIES;
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// A parsed listing request: one page window plus the filters present.
///
/// The data query and the count query are both rendered from the same
/// [`Listing::clause`] and bind the same [`Listing::values`], so the
/// pagination metadata always describes the filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    page: i64,
    limit: i64,
    predicates: Vec<(&'static Filter, String)>,
}

impl Listing {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            predicates: Vec::new(),
        }
    }

    /// Parse query-string pairs. Unknown parameters are ignored;
    /// predicates follow the static filter table order regardless of
    /// the order parameters appeared in.
    pub fn parse(query: &HashMap<String, String>) -> Result<Self, ListingError> {
        let page = Self::positive(query, "page", DEFAULT_PAGE)?;
        let limit = Self::positive(query, "limit", DEFAULT_LIMIT)?;
        let predicates = super::FILTERS
            .iter()
            .filter_map(|filter| query.get(filter.param).map(|v| (filter, v.clone())))
            .collect();
        Ok(Self {
            page,
            limit,
            predicates,
        })
    }

    fn positive(
        query: &HashMap<String, String>,
        param: &'static str,
        default: i64,
    ) -> Result<i64, ListingError> {
        match query.get(param) {
            None => Ok(default),
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) if n >= 1 => Ok(n),
                _ => Err(ListingError(param)),
            },
        }
    }

    pub fn with(mut self, param: &str, value: impl Into<String>) -> Self {
        if let Some(filter) = Filter::lookup(param) {
            self.predicates.retain(|(f, _)| f.param != param);
            self.predicates.push((filter, value.into()));
            self.predicates.sort_by_key(|(f, _)| {
                super::FILTERS
                    .iter()
                    .position(|x| x.param == f.param)
                    .unwrap_or(usize::MAX)
            });
        }
        self
    }

    pub fn page(&self) -> i64 {
        self.page
    }
    pub fn limit(&self) -> i64 {
        self.limit
    }
    /// Rows skipped before this page. Saturates at `i64::MAX`, which
    /// lies past any table and so yields an empty page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).checked_mul(self.limit).unwrap_or(i64::MAX)
    }
    pub fn predicates(&self) -> impl Iterator<Item = (&'static Filter, &str)> + '_ {
        self.predicates.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// `WHERE a = $1 AND b = $2 ...`, or empty when no filter is present.
    pub fn clause(&self) -> String {
        match self.predicates.is_empty() {
            true => String::new(),
            false => format!(
                "WHERE {}",
                self.predicates
                    .iter()
                    .enumerate()
                    .map(|(i, (filter, _))| filter.predicate(i + 1))
                    .collect::<Vec<_>>()
                    .join(" AND ")
            ),
        }
    }

    /// Filter values in placeholder order.
    pub fn values(&self) -> Vec<&str> {
        self.predicates.iter().map(|(_, v)| v.as_str()).collect()
    }

    /// Data query. LIMIT and OFFSET bind right after the filter values.
    pub fn select(&self) -> String {
        let n = self.predicates.len();
        format!(
            "SELECT {} FROM {} {} ORDER BY policy_id LIMIT ${} OFFSET ${}",
            COLUMNS,
            POLICIES,
            self.clause(),
            n + 1,
            n + 2
        )
    }

    /// Count query over the same predicates, no window.
    pub fn count(&self) -> String {
        format!("SELECT COUNT(*) FROM {} {}", POLICIES, self.clause())
    }

    pub fn paginate<T>(&self, total: i64, data: Vec<T>) -> Page<T> {
        Page {
            total_items: total,
            total_pages: total / self.limit + (total % self.limit != 0) as i64,
            current_page: self.page,
            data,
        }
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// A page or limit parameter that is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingError(pub &'static str);

impl std::fmt::Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} must be a positive integer", self.0)
    }
}

impl std::error::Error for ListingError {}

/// One window of a filtered listing plus the metadata to walk the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub data: Vec<T>,
}
