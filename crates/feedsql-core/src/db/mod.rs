//! Driver boundary and the execution facade built on it.

mod script;
mod session;

pub use script::{ScriptError, ScriptedDriver};
pub use session::Session;

use crate::value::Row;

///
/// Driver
///
/// The two calls the engine needs from a database connection. Statements
/// arrive fully rendered; there are no bind parameters. Implementations block
/// until the store answers.
///

pub trait Driver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run a mutating statement and return the affected-row count.
    fn execute(&mut self, sql: &str) -> Result<u64, Self::Error>;

    /// Run a read statement and return its rows in store order.
    fn query(&mut self, sql: &str) -> Result<Vec<Row>, Self::Error>;
}

impl<D: Driver + ?Sized> Driver for &mut D {
    type Error = D::Error;

    fn execute(&mut self, sql: &str) -> Result<u64, Self::Error> {
        (**self).execute(sql)
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>, Self::Error> {
        (**self).query(sql)
    }
}
