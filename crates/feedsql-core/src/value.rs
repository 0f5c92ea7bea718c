use crate::{error::DecodeError, wrapper::WrapperKind};
use derive_more::{Deref, From, IntoIterator};
use std::fmt;

///
/// Scalar
///
/// Closed set of plain column values the encoder knows how to render.
///

#[derive(Clone, Debug, From, PartialEq)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float32(f32),
    Float(f64),
    Char(char),
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Uint(value.into())
    }
}

///
/// FieldValue
///
/// Runtime value of one record field, ready for encoding.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Scalar(Scalar),
    DeferredDefault { default: bool, value: Scalar },
    Nullable { null: bool, value: Scalar },
    Timestamp { now: bool, unix: i64 },
    Nested(&'static str),
}

impl FieldValue {
    /// Wrapper kind of this value, if any.
    #[must_use]
    pub const fn wrapper(&self) -> Option<WrapperKind> {
        match self {
            Self::DeferredDefault { .. } => Some(WrapperKind::DeferredDefault),
            Self::Nullable { .. } => Some(WrapperKind::Nullable),
            Self::Timestamp { .. } => Some(WrapperKind::Timestamp),
            Self::Scalar(_) | Self::Nested(_) => None,
        }
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

///
/// Cell
///
/// One positional value returned by the driver.
/// Text-protocol drivers report every non-null value as `Text`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

macro_rules! impl_cell_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_cell_from! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Uint,
    u64 => Uint,
    f64 => Float,
    String => Text,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Bool(v) => write!(f, "bool {v}"),
            Self::Int(v) => write!(f, "int {v}"),
            Self::Uint(v) => write!(f, "uint {v}"),
            Self::Float(v) => write!(f, "float {v}"),
            Self::Text(v) => write!(f, "text '{v}'"),
        }
    }
}

///
/// Row
/// Positional cells of one result row.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
pub struct Row(#[into_iterator(owned, ref)] Vec<Cell>);

impl Row {
    #[must_use]
    pub const fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Cell at `position`, or a decode error naming the row width.
    pub fn cell(&self, position: usize) -> Result<&Cell, DecodeError> {
        self.0.get(position).ok_or(DecodeError::MissingCell {
            position,
            len: self.0.len(),
        })
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
