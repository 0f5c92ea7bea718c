use super::Query;
use crate::{
    descriptor,
    error::{Error, StatementError},
    traits::Record,
    validate::StatementKind,
};

/// `DELETE FROM <T> WHERE <pk> IN (<subquery>)`.
///
/// The primary key is the first declared field. The subquery must be a read
/// statement and should project exactly that column.
pub fn delete_by_subquery<R: Record>(subquery: &Query) -> Result<Query, Error> {
    if subquery.kind() != StatementKind::Read {
        return Err(StatementError::WrongKind {
            expected: StatementKind::Read,
            found: subquery.kind(),
        }
        .into());
    }

    let primary_key = descriptor::primary_key_column::<R>()?;
    let sql = format!(
        "DELETE FROM {} WHERE {primary_key} IN ({})",
        R::TABLE,
        subquery.sql()
    );

    Ok(Query::new(sql)?)
}
