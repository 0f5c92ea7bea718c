//! Statement assembly. Every builder here is pure: it reads the record's
//! static descriptors (and, for inserts, a populated value) and returns a
//! classified [`Query`].

mod catalog;
mod condition;
mod delete;
mod insert;
mod select;

pub use catalog::table_exists;
pub use condition::{ASSET_ID_COLUMN, Condition, Direction, Limit, asset_ordered, match_columns};
pub use delete::delete_by_subquery;
pub use insert::insert;
pub use select::{
    select_all, select_by_asset_ordered, select_columns, select_matching, select_where,
};

use crate::{
    error::StatementError,
    validate::{self, StatementKind},
};
use std::fmt;

///
/// Query
///
/// An assembled statement and its leading-keyword classification.
/// Construction runs the statement guard, so a `Query` is always
/// recognizable; whether it is the right kind is checked at execution.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Query {
    sql: String,
    kind: StatementKind,
}

impl Query {
    pub fn new(sql: impl Into<String>) -> Result<Self, StatementError> {
        let sql = sql.into();
        let kind = validate::classify(&sql)?;

        Ok(Self { sql, kind })
    }

    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(self.kind, StatementKind::Mutating)
    }

    #[must_use]
    pub fn into_sql(self) -> String {
        self.sql
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}
