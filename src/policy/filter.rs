/// SQL type a filter value is coerced into before comparison.
/// Query-string values always arrive as text; the database does the parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Bigint,
    Numeric,
    Boolean,
}

impl Kind {
    /// Right-hand side of `column = ...` for the n-th bound parameter.
    pub fn placeholder(&self, n: usize) -> String {
        match self {
            Self::Text => format!("${}", n),
            Self::Bigint => format!("(${}::TEXT)::BIGINT", n),
            Self::Numeric => format!("(${}::TEXT)::NUMERIC", n),
            Self::Boolean => format!("(${}::TEXT)::BOOLEAN", n),
        }
    }
}

/// An optional equality predicate on one column, named by its query parameter.
#[derive(Debug, PartialEq, Eq)]
pub struct Filter {
    pub param: &'static str,
    pub column: &'static str,
    pub kind: Kind,
}

impl Filter {
    pub fn lookup(param: &str) -> Option<&'static Filter> {
        FILTERS.iter().find(|f| f.param == param)
    }
    pub fn predicate(&self, n: usize) -> String {
        format!("{} = {}", self.column, self.kind.placeholder(n))
    }
}

/// Every recognized listing filter, in the order predicates are emitted.
#[rustfmt::skip]
pub static FILTERS: [Filter; 14] = [
    Filter { param: "region",                     column: "customer_region",            kind: Kind::Text    },
    Filter { param: "segment",                    column: "vehicle_segment",            kind: Kind::Text    },
    Filter { param: "fuel",                       column: "fuel",                       kind: Kind::Text    },
    Filter { param: "policy_id",                  column: "policy_id",                  kind: Kind::Bigint  },
    Filter { param: "customer_id",                column: "customer_id",                kind: Kind::Bigint  },
    Filter { param: "premium",                    column: "premium",                    kind: Kind::Numeric },
    Filter { param: "bodily_injury_liability",    column: "bodily_injury_liability",    kind: Kind::Boolean },
    Filter { param: "personal_injury_protection", column: "personal_injury_protection", kind: Kind::Boolean },
    Filter { param: "property_damage_liability",  column: "property_damage_liability",  kind: Kind::Boolean },
    Filter { param: "collision",                  column: "collision",                  kind: Kind::Boolean },
    Filter { param: "comprehensive",              column: "comprehensive",              kind: Kind::Boolean },
    Filter { param: "customer_gender",            column: "customer_gender",            kind: Kind::Text    },
    Filter { param: "customer_income_group",      column: "customer_income_group",      kind: Kind::Text    },
    Filter { param: "customer_marital_status",    column: "customer_marital_status",    kind: Kind::Boolean },
];
