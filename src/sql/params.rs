//! Values bound to builder placeholders.

/// A value bound to a `$n` placeholder. The animals table only has text and integer columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    BigInt(i64),
}

impl From<&str> for SqlParam {
    fn from(s: &str) -> Self {
        SqlParam::Text(s.to_string())
    }
}

impl From<i32> for SqlParam {
    fn from(n: i32) -> Self {
        SqlParam::Int(n)
    }
}

impl From<i64> for SqlParam {
    fn from(n: i64) -> Self {
        SqlParam::BigInt(n)
    }
}

/// Bind every param of a builder query, in placeholder order.
/// Works for `query`, `query_as` and `query_scalar`, which share the `bind` shape.
macro_rules! bind_params {
    ($query:expr, $params:expr) => {{
        let mut query = $query;
        for p in $params {
            query = match p {
                $crate::sql::SqlParam::Text(s) => query.bind(s.clone()),
                $crate::sql::SqlParam::Int(n) => query.bind(*n),
                $crate::sql::SqlParam::BigInt(n) => query.bind(*n),
            };
        }
        query
    }};
}

pub(crate) use bind_params;
