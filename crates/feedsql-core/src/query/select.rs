use super::{
    Query,
    condition::{Condition, Limit, asset_ordered, match_columns},
};
use crate::{
    descriptor,
    error::{BoundsError, Error},
    traits::Record,
    value::Scalar,
};
use std::collections::BTreeSet;

/// `SELECT * FROM <T>`.
pub fn select_all<R: Record>() -> Result<Query, Error> {
    select_where::<R>(&[], &[])
}

/// `SELECT <c1>, <c2>, ... FROM <T>` for the given field indices.
pub fn select_columns<R: Record>(columns: &[usize]) -> Result<Query, Error> {
    if columns.is_empty() {
        return Err(BoundsError::EmptySelection { table: R::TABLE }.into());
    }

    select_where::<R>(columns, &[])
}

/// Projection plus trailing conditions, one per line.
///
/// An empty `columns` slice selects `*`. Conditions are appended in order and
/// are not checked beyond what their own builders checked.
pub fn select_where<R: Record>(columns: &[usize], conditions: &[Condition]) -> Result<Query, Error> {
    descriptor::fields::<R>()?;
    let projection = projection::<R>(columns)?;

    let mut sql = format!("SELECT {projection} FROM {}", R::TABLE);
    for condition in conditions {
        sql.push('\n');
        sql.push_str(&condition.render());
    }

    Ok(Query::new(sql)?)
}

/// Rows of one asset ordered by the column at `order_by`.
pub fn select_by_asset_ordered<R: Record>(
    columns: &[usize],
    asset_id: i64,
    order_by: usize,
    limit: impl Into<Limit>,
    desc: bool,
) -> Result<Query, Error> {
    let conditions = asset_ordered::<R>(asset_id, order_by, limit, desc)?;

    select_where::<R>(columns, &conditions)
}

/// Rows where every listed column equals its paired value.
pub fn select_matching<R: Record>(
    columns: &[usize],
    match_on: &[usize],
    values: &[Scalar],
    limit: impl Into<Limit>,
) -> Result<Query, Error> {
    let conditions = match_columns::<R>(match_on, values, limit)?;

    select_where::<R>(columns, &conditions)
}

// `*` for an empty selection, otherwise the named columns in the given order
fn projection<R: Record>(columns: &[usize]) -> Result<String, Error> {
    if columns.is_empty() {
        return Ok("*".to_string());
    }

    let len = R::FIELDS.len();
    if columns.len() > len {
        return Err(BoundsError::TooManyColumns {
            table: R::TABLE,
            selected: columns.len(),
            len,
        }
        .into());
    }

    let mut seen = BTreeSet::new();
    let mut names = Vec::with_capacity(columns.len());
    for &index in columns {
        if !seen.insert(index) {
            return Err(BoundsError::DuplicateColumn {
                table: R::TABLE,
                index,
            }
            .into());
        }
        names.push(descriptor::column_name::<R>(index)?);
    }

    Ok(names.join(", "))
}
