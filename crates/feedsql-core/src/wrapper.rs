//! The three composite field kinds the engine understands, and the
//! classifier that recognizes them from a field's declared [`ColumnKind`].

use crate::{
    error::DecodeError,
    model::ColumnKind,
    traits::{Column, ScalarColumn},
    value::{Cell, FieldValue},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use time::{PrimitiveDateTime, macros::format_description};

///
/// WrapperKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum WrapperKind {
    #[display("deferred-default")]
    DeferredDefault,
    #[display("nullable")]
    Nullable,
    #[display("timestamp")]
    Timestamp,
}

impl WrapperKind {
    /// Name of the inner slot a decoded column binds to.
    #[must_use]
    pub const fn storage_slot(self) -> &'static str {
        match self {
            Self::DeferredDefault | Self::Nullable => "value",
            Self::Timestamp => "datetime",
        }
    }

    /// Name of the flag consulted on encode and never hydrated on decode.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::DeferredDefault => "default",
            Self::Nullable => "null",
            Self::Timestamp => "now",
        }
    }
}

/// Wrapper kind of a declared field shape, independent of its inner scalar.
#[must_use]
pub const fn classify(kind: ColumnKind) -> Option<WrapperKind> {
    match kind {
        ColumnKind::DeferredDefault(_) => Some(WrapperKind::DeferredDefault),
        ColumnKind::Nullable(_) => Some(WrapperKind::Nullable),
        ColumnKind::Timestamp => Some(WrapperKind::Timestamp),
        ColumnKind::Scalar(_) | ColumnKind::Nested(_) => None,
    }
}

#[must_use]
pub const fn is_wrapper(kind: ColumnKind) -> bool {
    classify(kind).is_some()
}

/// Structured but not one of the three wrappers; rejected everywhere.
#[must_use]
pub const fn is_nested_record(kind: ColumnKind) -> bool {
    nested_record(kind).is_some()
}

/// Type name of a nested record field.
#[must_use]
pub const fn nested_record(kind: ColumnKind) -> Option<&'static str> {
    match kind {
        ColumnKind::Nested(name) => Some(name),
        _ => None,
    }
}

///
/// DeferredDefault
///
/// Encodes as `DEFAULT` while `default` is set, otherwise as `value`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeferredDefault<T> {
    pub default: bool,
    pub value: T,
}

impl<T> DeferredDefault<T> {
    /// Let the store pick the value.
    #[must_use]
    pub fn deferred() -> Self
    where
        T: Default,
    {
        Self {
            default: true,
            value: T::default(),
        }
    }

    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            default: false,
            value,
        }
    }
}

impl<T: ScalarColumn> Column for DeferredDefault<T> {
    const KIND: ColumnKind = ColumnKind::DeferredDefault(T::SCALAR);

    fn to_value(&self) -> FieldValue {
        FieldValue::DeferredDefault {
            default: self.default,
            value: self.value.to_scalar(),
        }
    }

    fn decode_cell(&mut self, cell: &Cell) -> Result<(), DecodeError> {
        self.value = T::from_cell(cell)?;

        Ok(())
    }
}

///
/// Nullable
///
/// Encodes as `NULL` while `null` is set, otherwise as `value`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Nullable<T> {
    pub null: bool,
    pub value: T,
}

impl<T> Nullable<T> {
    #[must_use]
    pub fn null() -> Self
    where
        T: Default,
    {
        Self {
            null: true,
            value: T::default(),
        }
    }

    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { null: false, value }
    }
}

impl<T: ScalarColumn> Column for Nullable<T> {
    const KIND: ColumnKind = ColumnKind::Nullable(T::SCALAR);

    fn to_value(&self) -> FieldValue {
        FieldValue::Nullable {
            null: self.null,
            value: self.value.to_scalar(),
        }
    }

    // A stored NULL leaves the zero value in the slot; the flag stays as is.
    fn decode_cell(&mut self, cell: &Cell) -> Result<(), DecodeError> {
        self.value = match cell {
            Cell::Null => T::default(),
            _ => T::from_cell(cell)?,
        };

        Ok(())
    }
}

///
/// Timestamp
///
/// Encodes as `NOW()` while `now` is set, otherwise as
/// `TO_TIMESTAMP(<unix>)`. Decoding fills `datetime` only.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Timestamp {
    pub now: bool,
    pub datetime: String,
    pub unix: i64,
}

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Self {
            now: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_unix(unix: i64) -> Self {
        Self {
            unix,
            ..Self::default()
        }
    }

    /// Recompute `unix` from the decoded `datetime`.
    pub fn sync_unix(&mut self) -> Result<(), DecodeError> {
        self.unix = datetime_to_unix(&self.datetime)?;

        Ok(())
    }
}

impl Column for Timestamp {
    const KIND: ColumnKind = ColumnKind::Timestamp;

    fn to_value(&self) -> FieldValue {
        FieldValue::Timestamp {
            now: self.now,
            unix: self.unix,
        }
    }

    fn decode_cell(&mut self, cell: &Cell) -> Result<(), DecodeError> {
        match cell {
            Cell::Text(text) => {
                self.datetime.clone_from(text);
                Ok(())
            }
            Cell::Null => Err(DecodeError::UnexpectedNull {
                target: "timestamp",
            }),
            other => Err(DecodeError::Mismatch {
                cell: other.to_string(),
                target: "timestamp",
            }),
        }
    }
}

/// Convert a Postgres `TIMESTAMP` text value (`YYYY-MM-DD HH:MM:SS`, UTC) to
/// unix seconds. Fractional seconds and an ISO `T`/`Z` framing are accepted
/// and truncated.
pub fn datetime_to_unix(datetime: &str) -> Result<i64, DecodeError> {
    let normalized = datetime.trim().trim_end_matches('Z').replacen('T', " ", 1);
    let whole_seconds = normalized
        .split_once('.')
        .map_or(normalized.as_str(), |(head, _)| head);

    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let parsed =
        PrimitiveDateTime::parse(whole_seconds, &format).map_err(|err| DecodeError::Datetime {
            value: datetime.to_string(),
            reason: err.to_string(),
        })?;

    Ok(parsed.assume_utc().unix_timestamp())
}
