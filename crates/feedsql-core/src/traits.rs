use crate::{
    error::{DecodeError, Error},
    model::{ColumnKind, FieldDescriptor, ScalarKind},
    value::{Cell, FieldValue, Scalar},
};

// ============================================================================
// COLUMN VALUES
// ============================================================================

///
/// Column
///
/// Anything that can sit in a record field: a scalar, one of the three
/// wrappers, or (rejected at derivation time) another record.
///

pub trait Column {
    const KIND: ColumnKind;

    /// Snapshot of the runtime value for encoding.
    fn to_value(&self) -> FieldValue;

    /// Bind one positional cell into this field's storage slot.
    fn decode_cell(&mut self, cell: &Cell) -> Result<(), DecodeError>;
}

///
/// ScalarColumn
///
/// Plain column values. Only these may be wrapped, so a wrapper inside a
/// wrapper does not type-check.
///

pub trait ScalarColumn: Column + Default + Sized {
    const SCALAR: ScalarKind;

    fn to_scalar(&self) -> Scalar;

    fn from_cell(cell: &Cell) -> Result<Self, DecodeError>;
}

// ============================================================================
// RECORDS
// ============================================================================

///
/// Record
///
/// A struct that maps 1:1 onto a table. Implemented by `#[derive(Record)]`;
/// field order in `FIELDS` is declaration order and is positional everywhere.
///

pub trait Record {
    /// Unqualified type name without generic parameters.
    const TABLE: &'static str;

    const FIELDS: &'static [FieldDescriptor];

    /// Runtime value of the field at `index`.
    fn field_value(&self, index: usize) -> Option<FieldValue>;

    /// Bind `cell` into the field at `index`.
    fn decode_field(&mut self, index: usize, cell: &Cell) -> Result<(), Error>;
}

// ============================================================================
// SCALAR IMPLEMENTATIONS
// ============================================================================

fn mismatch(cell: &Cell, target: &'static str) -> DecodeError {
    match cell {
        Cell::Null => DecodeError::UnexpectedNull { target },
        other => DecodeError::Mismatch {
            cell: other.to_string(),
            target,
        },
    }
}

macro_rules! impl_scalar_column {
    ($ty:ty) => {
        impl Column for $ty {
            const KIND: ColumnKind = ColumnKind::Scalar(<$ty as ScalarColumn>::SCALAR);

            fn to_value(&self) -> FieldValue {
                FieldValue::Scalar(self.to_scalar())
            }

            fn decode_cell(&mut self, cell: &Cell) -> Result<(), DecodeError> {
                *self = <$ty as ScalarColumn>::from_cell(cell)?;

                Ok(())
            }
        }
    };
}

macro_rules! impl_int_column {
    ($($ty:ty => $kind:ident, $variant:ident, $wide:ty);* $(;)?) => {
        $(
            impl ScalarColumn for $ty {
                const SCALAR: ScalarKind = ScalarKind::$kind;

                fn to_scalar(&self) -> Scalar {
                    Scalar::$variant(<$wide>::from(*self))
                }

                fn from_cell(cell: &Cell) -> Result<Self, DecodeError> {
                    let target = stringify!($ty);
                    match cell {
                        Cell::Int(v) => Self::try_from(*v).map_err(|_| mismatch(cell, target)),
                        Cell::Uint(v) => Self::try_from(*v).map_err(|_| mismatch(cell, target)),
                        Cell::Text(text) => text.trim().parse().map_err(|_| mismatch(cell, target)),
                        _ => Err(mismatch(cell, target)),
                    }
                }
            }

            impl_scalar_column!($ty);
        )*
    };
}

impl_int_column! {
    i8 => Int, Int, i64;
    i16 => Int, Int, i64;
    i32 => Int, Int, i64;
    i64 => Int, Int, i64;
    u8 => Uint, Uint, u64;
    u16 => Uint, Uint, u64;
    u32 => Uint, Uint, u64;
    u64 => Uint, Uint, u64;
}

macro_rules! impl_float_column {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ScalarColumn for $ty {
                const SCALAR: ScalarKind = ScalarKind::Float;

                // f32 stays f32 so it renders in its own shortest form
                fn to_scalar(&self) -> Scalar {
                    Scalar::$variant(*self)
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
                fn from_cell(cell: &Cell) -> Result<Self, DecodeError> {
                    let target = stringify!($ty);
                    match cell {
                        Cell::Float(v) => Ok(*v as Self),
                        Cell::Int(v) => Ok(*v as Self),
                        Cell::Uint(v) => Ok(*v as Self),
                        Cell::Text(text) => text.trim().parse().map_err(|_| mismatch(cell, target)),
                        _ => Err(mismatch(cell, target)),
                    }
                }
            }

            impl_scalar_column!($ty);
        )*
    };
}

impl_float_column!(f32 => Float32, f64 => Float);

impl ScalarColumn for bool {
    const SCALAR: ScalarKind = ScalarKind::Bool;

    fn to_scalar(&self) -> Scalar {
        Scalar::Bool(*self)
    }

    fn from_cell(cell: &Cell) -> Result<Self, DecodeError> {
        match cell {
            Cell::Bool(v) => Ok(*v),
            Cell::Int(0) | Cell::Uint(0) => Ok(false),
            Cell::Int(1) | Cell::Uint(1) => Ok(true),
            Cell::Text(text) => match text.trim() {
                "t" | "true" | "TRUE" => Ok(true),
                "f" | "false" | "FALSE" => Ok(false),
                _ => Err(mismatch(cell, "bool")),
            },
            _ => Err(mismatch(cell, "bool")),
        }
    }
}

impl_scalar_column!(bool);

impl ScalarColumn for String {
    const SCALAR: ScalarKind = ScalarKind::Text;

    fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.clone())
    }

    fn from_cell(cell: &Cell) -> Result<Self, DecodeError> {
        match cell {
            Cell::Text(text) => Ok(text.clone()),
            _ => Err(mismatch(cell, "string")),
        }
    }
}

impl_scalar_column!(String);

// chars are written as their code point, so decoding reads a code point back
impl ScalarColumn for char {
    const SCALAR: ScalarKind = ScalarKind::Char;

    fn to_scalar(&self) -> Scalar {
        Scalar::Char(*self)
    }

    fn from_cell(cell: &Cell) -> Result<Self, DecodeError> {
        let code = match cell {
            Cell::Int(v) => u32::try_from(*v).ok(),
            Cell::Uint(v) => u32::try_from(*v).ok(),
            Cell::Text(text) => text.trim().parse::<u32>().ok().or_else(|| {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(u32::from(c)),
                    _ => None,
                }
            }),
            _ => None,
        };

        code.and_then(Self::from_u32)
            .ok_or_else(|| mismatch(cell, "char"))
    }
}

impl_scalar_column!(char);
