use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error returned by every derivation and execution entrypoint.
/// Each variant maps onto one [`ErrorClass`]; callers that only care about
/// the taxonomy should match on [`Error::class`].
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Statement(#[from] StatementError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("table already exists: {table}")]
    TableExists { table: String },

    #[error("driver error: {0}")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wrap a driver failure without reinterpreting it.
    pub fn driver<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Driver(Box::new(err))
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Shape(_) => ErrorClass::Shape,
            Self::Bounds(_) => ErrorClass::Bounds,
            Self::Statement(_) => ErrorClass::Statement,
            Self::Decode(_) => ErrorClass::Decode,
            Self::TableExists { .. } => ErrorClass::Conflict,
            Self::Driver(_) => ErrorClass::Driver,
        }
    }

    /// True for the expected "table already exists" outcome of a create.
    #[must_use]
    pub const fn is_table_exists(&self) -> bool {
        matches!(self, Self::TableExists { .. })
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ShapeError
///
/// The record type cannot be mapped onto a table.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ShapeError {
    #[error("field '{field}' of {table} has no column definition")]
    MissingColumn {
        table: &'static str,
        field: &'static str,
    },

    #[error("field '{field}' of {table} has an empty column definition")]
    EmptyColumn {
        table: &'static str,
        field: &'static str,
    },

    #[error("field '{field}' of {table} is a nested record ({nested}); only wrapper values may be composite")]
    NestedRecord {
        table: &'static str,
        field: &'static str,
        nested: &'static str,
    },

    #[error("nested record {nested} cannot be encoded as a column value")]
    NestedValue { nested: &'static str },

    #[error("record {table} declares no fields")]
    NoFields { table: &'static str },
}

///
/// BoundsError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BoundsError {
    #[error("field index {index} out of range for {table} ({len} fields)")]
    FieldIndex {
        table: &'static str,
        index: usize,
        len: usize,
    },

    #[error("selected {selected} columns but {table} only has {len}")]
    TooManyColumns {
        table: &'static str,
        selected: usize,
        len: usize,
    },

    #[error("column selection for {table} is empty")]
    EmptySelection { table: &'static str },

    #[error("column index {index} selected more than once for {table}")]
    DuplicateColumn { table: &'static str, index: usize },

    #[error("match columns ({columns}) and match values ({values}) differ in length")]
    MatchArity { columns: usize, values: usize },

    #[error("match on {table} needs at least one column")]
    EmptyMatch { table: &'static str },
}

///
/// StatementError
///
/// A statement failed the leading-keyword guard and never reached the driver.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StatementError {
    #[error("statement does not start with a recognized keyword: {statement}")]
    Unrecognized { statement: String },

    #[error("expected a {expected} statement, found a {found} statement")]
    WrongKind {
        expected: crate::validate::StatementKind,
        found: crate::validate::StatementKind,
    },
}

///
/// DecodeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecodeError {
    #[error("cannot bind {cell} to a {target} slot")]
    Mismatch { cell: String, target: &'static str },

    #[error("cannot bind NULL to a non-nullable {target} slot")]
    UnexpectedNull { target: &'static str },

    #[error("row has {len} cells, position {position} requested")]
    MissingCell { position: usize, len: usize },

    #[error("query returned no rows, expected one")]
    MissingRow,

    #[error("nested record {nested} cannot be decoded from a single column")]
    NestedRecord { nested: &'static str },

    #[error("invalid datetime '{value}': {reason}")]
    Datetime { value: String, reason: String },
}

///
/// ErrorClass
/// Stable error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Shape,
    Bounds,
    Statement,
    Conflict,
    Decode,
    Driver,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Shape => "shape",
            Self::Bounds => "bounds",
            Self::Statement => "statement",
            Self::Conflict => "conflict",
            Self::Decode => "decode",
            Self::Driver => "driver",
        };
        write!(f, "{label}")
    }
}
