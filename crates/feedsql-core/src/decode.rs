//! Positional row decoding.
//!
//! Cells are bound to fields by position only; column names in the result
//! set are never consulted. Wrapper fields receive the cell in their inner
//! slot and keep whatever flag they already had.

use crate::{
    error::{BoundsError, Error},
    traits::Record,
    value::Row,
};

/// Bind cell `i` to field `i` for every declared field.
pub fn decode_row<R: Record>(row: &Row, record: &mut R) -> Result<(), Error> {
    for index in 0..R::FIELDS.len() {
        record.decode_field(index, row.cell(index)?)?;
    }

    Ok(())
}

/// Bind cell `i` to field `fields[i]`.
///
/// Used with partial projections, where the row only carries the selected
/// columns in selection order.
pub fn decode_selected<R: Record>(row: &Row, record: &mut R, fields: &[usize]) -> Result<(), Error> {
    let len = R::FIELDS.len();
    if fields.len() > len {
        return Err(BoundsError::TooManyColumns {
            table: R::TABLE,
            selected: fields.len(),
            len,
        }
        .into());
    }
    if let Some(&index) = fields.iter().find(|&&index| index >= len) {
        return Err(BoundsError::FieldIndex {
            table: R::TABLE,
            index,
            len,
        }
        .into());
    }

    for (position, &index) in fields.iter().enumerate() {
        record.decode_field(index, row.cell(position)?)?;
    }

    Ok(())
}

/// Decode every row into a fresh default record.
pub fn decode_rows<R: Record + Default>(rows: &[Row]) -> Result<Vec<R>, Error> {
    rows.iter()
        .map(|row| -> Result<R, Error> {
            let mut record = R::default();
            decode_row(row, &mut record)?;

            Ok(record)
        })
        .collect()
}

/// Like [`decode_rows`], for rows produced by a partial projection.
pub fn decode_rows_selected<R: Record + Default>(
    rows: &[Row],
    fields: &[usize],
) -> Result<Vec<R>, Error> {
    rows.iter()
        .map(|row| -> Result<R, Error> {
            let mut record = R::default();
            decode_selected(row, &mut record, fields)?;

            Ok(record)
        })
        .collect()
}
