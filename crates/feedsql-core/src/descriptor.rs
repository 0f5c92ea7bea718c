//! Column metadata lookups over a record's static field table.

use crate::{
    error::{BoundsError, Error, ShapeError},
    model::FieldDescriptor,
    traits::Record,
    wrapper::nested_record,
};

/// Column clause of every field, in declaration order.
pub fn column_definitions<R: Record>() -> Result<Vec<&'static str>, Error> {
    let fields = fields::<R>()?;

    fields
        .iter()
        .map(|field| column_definition::<R>(field))
        .collect()
}

/// Bare column name of every field, in declaration order.
pub fn column_names<R: Record>() -> Result<Vec<&'static str>, Error> {
    let fields = fields::<R>()?;

    fields
        .iter()
        .map(|field| bare_name::<R>(field))
        .collect()
}

/// Bare column name of the field at `index`.
pub fn column_name<R: Record>(index: usize) -> Result<&'static str, Error> {
    let field = field::<R>(index)?;

    bare_name::<R>(field)
}

/// Column name of the first declared field.
pub fn primary_key_column<R: Record>() -> Result<&'static str, Error> {
    fields::<R>()?;

    column_name::<R>(0)
}

/// Descriptor at `index`, bounds-checked.
pub fn field<R: Record>(index: usize) -> Result<&'static FieldDescriptor, Error> {
    R::FIELDS.get(index).ok_or_else(|| {
        BoundsError::FieldIndex {
            table: R::TABLE,
            index,
            len: R::FIELDS.len(),
        }
        .into()
    })
}

/// All descriptors; a record without fields cannot become a table.
pub fn fields<R: Record>() -> Result<&'static [FieldDescriptor], Error> {
    if R::FIELDS.is_empty() {
        return Err(ShapeError::NoFields { table: R::TABLE }.into());
    }

    Ok(R::FIELDS)
}

/// Reject records that embed another record as a field.
pub fn ensure_flat<R: Record>() -> Result<(), Error> {
    for field in fields::<R>()? {
        if let Some(nested) = nested_record(field.kind) {
            return Err(ShapeError::NestedRecord {
                table: R::TABLE,
                field: field.ident,
                nested,
            }
            .into());
        }
    }

    Ok(())
}

fn column_definition<R: Record>(field: &FieldDescriptor) -> Result<&'static str, Error> {
    match field.column {
        None => Err(ShapeError::MissingColumn {
            table: R::TABLE,
            field: field.ident,
        }
        .into()),
        Some(column) if column.trim().is_empty() => Err(ShapeError::EmptyColumn {
            table: R::TABLE,
            field: field.ident,
        }
        .into()),
        Some(column) => Ok(column),
    }
}

fn bare_name<R: Record>(field: &FieldDescriptor) -> Result<&'static str, Error> {
    column_definition::<R>(field)?;

    field.column_name().ok_or_else(|| {
        ShapeError::EmptyColumn {
            table: R::TABLE,
            field: field.ident,
        }
        .into()
    })
}
