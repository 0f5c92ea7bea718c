use derive_more::Display;

///
/// FieldDescriptor
/// Macro-generated column metadata for one record field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    /// Rust field identifier (diagnostics only).
    pub ident: &'static str,
    /// Full column clause: name, type and constraints.
    pub column: Option<&'static str>,
    /// Trailing foreign-key clause.
    pub reference: Option<&'static str>,
    /// Standalone `CREATE INDEX` statement.
    pub index: Option<&'static str>,
    /// Declared value shape of the field.
    pub kind: ColumnKind,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn new(ident: &'static str, kind: ColumnKind) -> Self {
        Self {
            ident,
            column: None,
            reference: None,
            index: None,
            kind,
        }
    }

    #[must_use]
    pub const fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub const fn reference(mut self, reference: &'static str) -> Self {
        self.reference = Some(reference);
        self
    }

    #[must_use]
    pub const fn index(mut self, index: &'static str) -> Self {
        self.index = Some(index);
        self
    }

    /// First whitespace-delimited token of the column clause.
    #[must_use]
    pub fn column_name(&self) -> Option<&'static str> {
        self.column.and_then(|column| column.split_whitespace().next())
    }
}

///
/// ColumnKind
///
/// Declared shape of a field. Wrappers carry the scalar they wrap so the
/// generic parameter never affects classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnKind {
    Scalar(ScalarKind),
    DeferredDefault(ScalarKind),
    Nullable(ScalarKind),
    Timestamp,

    /// Another record used as a field; never mappable to a column.
    Nested(&'static str),
}

///
/// ScalarKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ScalarKind {
    #[display("text")]
    Text,
    #[display("bool")]
    Bool,
    #[display("int")]
    Int,
    #[display("uint")]
    Uint,
    #[display("float")]
    Float,
    #[display("char")]
    Char,
}
