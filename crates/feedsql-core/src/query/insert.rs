use super::Query;
use crate::{
    descriptor,
    encode::encode_value,
    error::{BoundsError, Error},
    traits::Record,
};

/// Build `INSERT INTO <T> (<cols>) VALUES (<vals>)` from a populated record.
///
/// Every field is written, in declaration order. Wrapper flags decide the
/// literal: `DEFAULT`, `NULL` or `NOW()` replace the inner value when set.
pub fn insert<R: Record>(record: &R) -> Result<Query, Error> {
    descriptor::ensure_flat::<R>()?;
    let columns = descriptor::column_names::<R>()?;

    let values = (0..columns.len())
        .map(|index| -> Result<String, Error> {
            let value = record.field_value(index).ok_or(BoundsError::FieldIndex {
                table: R::TABLE,
                index,
                len: columns.len(),
            })?;

            Ok(encode_value(&value)?)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        R::TABLE,
        columns.join(", "),
        values.join(", ")
    );

    Ok(Query::new(sql)?)
}
