use crate::{
    descriptor,
    encode::encode_scalar,
    error::{BoundsError, Error},
    traits::Record,
    value::Scalar,
};
use derive_more::Display;
use std::fmt;

///
/// CONSTANTS
///

/// Column the ordered-rows helper filters on.
pub const ASSET_ID_COLUMN: &str = "asset_id";

///
/// Direction
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Direction {
    #[default]
    #[display("ASC")]
    Asc,
    #[display("DESC")]
    Desc,
}

impl Direction {
    #[must_use]
    pub const fn from_desc(desc: bool) -> Self {
        if desc { Self::Desc } else { Self::Asc }
    }
}

///
/// Limit
///
/// Row cap for the structured helpers. Negative integers mean "no cap".
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Limit {
    #[default]
    Unbounded,
    Rows(u64),
}

impl Limit {
    /// Append the `LIMIT` clause, if any.
    fn push_into(self, conditions: &mut Vec<Condition>) {
        if let Self::Rows(rows) = self {
            conditions.push(Condition::Limit(rows));
        }
    }
}

impl From<i64> for Limit {
    fn from(limit: i64) -> Self {
        u64::try_from(limit).map_or(Self::Unbounded, Self::Rows)
    }
}

impl From<i32> for Limit {
    fn from(limit: i32) -> Self {
        Self::from(i64::from(limit))
    }
}

impl From<u64> for Limit {
    fn from(limit: u64) -> Self {
        Self::Rows(limit)
    }
}

impl From<Option<u64>> for Limit {
    fn from(limit: Option<u64>) -> Self {
        limit.map_or(Self::Unbounded, Self::Rows)
    }
}

///
/// Condition
///
/// One clause appended after `FROM <table>`. Structured variants render to a
/// single fragment; `Raw` is appended verbatim and never inspected.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Where {
        column: &'static str,
        value: Scalar,
    },
    And {
        column: &'static str,
        value: Scalar,
    },
    OrderBy {
        column: &'static str,
        direction: Direction,
    },
    Limit(u64),
    Raw(String),
}

impl Condition {
    pub fn raw(fragment: impl Into<String>) -> Self {
        Self::Raw(fragment.into())
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Where { column, value } => {
                write!(f, "WHERE {column} = {}", encode_scalar(value))
            }
            Self::And { column, value } => write!(f, "AND {column} = {}", encode_scalar(value)),
            Self::OrderBy { column, direction } => write!(f, "ORDER BY {column} {direction}"),
            Self::Limit(rows) => write!(f, "LIMIT {rows}"),
            Self::Raw(fragment) => f.write_str(fragment),
        }
    }
}

impl From<&str> for Condition {
    fn from(fragment: &str) -> Self {
        Self::raw(fragment)
    }
}

impl From<String> for Condition {
    fn from(fragment: String) -> Self {
        Self::Raw(fragment)
    }
}

/// `WHERE asset_id = <id>`, `ORDER BY <column> ASC|DESC`, then `LIMIT` when
/// the limit is bounded.
pub fn asset_ordered<R: Record>(
    asset_id: i64,
    order_by: usize,
    limit: impl Into<Limit>,
    desc: bool,
) -> Result<Vec<Condition>, Error> {
    let column = descriptor::column_name::<R>(order_by)?;

    let mut conditions = vec![
        Condition::Where {
            column: ASSET_ID_COLUMN,
            value: Scalar::Int(asset_id),
        },
        Condition::OrderBy {
            column,
            direction: Direction::from_desc(desc),
        },
    ];
    limit.into().push_into(&mut conditions);

    Ok(conditions)
}

/// `WHERE <c0> = <v0>`, then `AND <ci> = <vi>` per remaining pair, then
/// `LIMIT` when the limit is bounded.
pub fn match_columns<R: Record>(
    columns: &[usize],
    values: &[Scalar],
    limit: impl Into<Limit>,
) -> Result<Vec<Condition>, Error> {
    if columns.len() != values.len() {
        return Err(BoundsError::MatchArity {
            columns: columns.len(),
            values: values.len(),
        }
        .into());
    }
    if columns.is_empty() {
        return Err(BoundsError::EmptyMatch { table: R::TABLE }.into());
    }

    // resolve every column before building any fragment
    let names = columns
        .iter()
        .map(|&index| descriptor::column_name::<R>(index))
        .collect::<Result<Vec<_>, _>>()?;

    let mut conditions = names
        .into_iter()
        .zip(values.iter().cloned())
        .enumerate()
        .map(|(i, (column, value))| {
            if i == 0 {
                Condition::Where { column, value }
            } else {
                Condition::And { column, value }
            }
        })
        .collect::<Vec<_>>();
    limit.into().push_into(&mut conditions);

    Ok(conditions)
}
